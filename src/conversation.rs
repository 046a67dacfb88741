use crate::models::{Citation, Turn};

/// Ordered transcript of turns plus the in-flight flag. Append-only and the
/// single source of truth for what the chat panel renders; all mutation goes
/// through the operations below.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Conversation {
    turns: Vec<Turn>,
    pending: bool,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True from the moment a query is dispatched until its terminal turn
    /// (bot answer or error notice) is appended.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Appends the user's query verbatim (untrimmed) and marks a request as
    /// outstanding. Callers must have rejected blank input already.
    pub fn append_user_turn(&mut self, text: impl Into<String>) {
        debug_assert!(!self.pending, "a request is already outstanding");
        self.turns.push(Turn::user(text));
        self.pending = true;
    }

    /// Appends the answer for the outstanding request and settles it.
    pub fn append_bot_turn(&mut self, answer: impl Into<String>, sources: Vec<Citation>) {
        debug_assert!(self.pending, "no outstanding request to answer");
        self.turns.push(Turn::bot(answer, sources));
        self.pending = false;
    }

    /// Appends a fixed, non-technical error notice for the outstanding
    /// request and settles it. The conversation stays usable afterwards.
    pub fn append_error_turn(&mut self, message: impl Into<String>) {
        debug_assert!(self.pending, "no outstanding request to fail");
        self.turns.push(Turn::error(message));
        self.pending = false;
    }
}
