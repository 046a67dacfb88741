use std::fmt;

use serde::{Deserialize, Serialize};

/// The three kinds of transcript entries. Closed set: the renderer matches
/// exhaustively on this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnKind {
    User,
    Bot,
    Error,
}

/// One message unit in the conversation. Immutable once appended to the
/// transcript; never mutated, never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub kind: TurnKind,
    /// Display content. Raw query text for `User`, formatted answer (may
    /// contain markup) for `Bot`, a fixed human-readable message for `Error`.
    pub text: String,
    /// Supporting citations. Only ever non-empty on `Bot` turns.
    pub sources: Vec<Citation>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::User,
            text: text.into(),
            sources: Vec::new(),
        }
    }

    pub fn bot(answer: impl Into<String>, sources: Vec<Citation>) -> Self {
        Self {
            kind: TurnKind::Bot,
            text: answer.into(),
            sources,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: TurnKind::Error,
            text: message.into(),
            sources: Vec::new(),
        }
    }
}

/// Identifier of the document segment a citation points at. The service
/// emits either a number or a string depending on the ingestion pipeline
/// version; it is opaque and used for display only.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ChunkId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ChunkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkId::Number(n) => write!(f, "{n}"),
            ChunkId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// One supporting reference attached to a bot answer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Citation {
    pub title: String,
    pub url: String,
    pub chunk_id: ChunkId,
    pub snippet: String,
}

/// Request body for the answering endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    pub query: String,
}

/// Success payload from the answering endpoint. `sources` may be absent,
/// which is a valid answer with no citations, not an error.
#[derive(Clone, Debug, Deserialize)]
pub struct AskResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<Citation>,
}
