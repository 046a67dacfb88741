use std::future::Future;

use crate::api::ApiError;
use crate::conversation::Conversation;
use crate::models::AskResponse;

/// Mutable access to the conversation store. The UI backs this with a Leptos
/// write signal; tests back it with a `RefCell`.
pub trait ConversationHandle {
    fn update(&self, f: impl FnOnce(&mut Conversation));
}

/// Runs one submit/response cycle: append the user turn, call the answering
/// service, append exactly one terminal turn. A query whose trimmed text is
/// empty is ignored entirely — no store mutation, no service call. Returns
/// whether a request was actually dispatched.
///
/// Failures are uniform: whatever went wrong on the wire, the transcript gets
/// the fixed `error_message` and the detail goes to the log only. No retries;
/// the user resubmits manually.
pub async fn dispatch<H, S, Fut>(
    store: &H,
    raw_query: &str,
    error_message: &str,
    service: S,
) -> bool
where
    H: ConversationHandle,
    S: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<AskResponse, ApiError>>,
{
    if raw_query.trim().is_empty() {
        return false;
    }

    store.update(|conv| conv.append_user_turn(raw_query));

    match service(raw_query.to_string()).await {
        Ok(resp) => {
            store.update(|conv| conv.append_bot_turn(resp.answer, resp.sources));
        }
        Err(err) => {
            log::error!("answer request failed: {err}");
            store.update(|conv| conv.append_error_turn(error_message));
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::models::{ChunkId, Citation, TurnKind};

    impl ConversationHandle for RefCell<Conversation> {
        fn update(&self, f: impl FnOnce(&mut Conversation)) {
            f(&mut self.borrow_mut());
        }
    }

    const ERR_MSG: &str =
        "Sorry, something went wrong. Try again or check if your question relates to HVAC systems.";

    fn answer(answer: &str, sources: Vec<Citation>) -> Result<AskResponse, ApiError> {
        Ok(AskResponse {
            answer: answer.to_string(),
            sources,
        })
    }

    #[test]
    fn blank_queries_are_silently_ignored() {
        let store = RefCell::new(Conversation::new());

        for raw in ["", "   ", "\n\t "] {
            let dispatched = block_on(dispatch(&store, raw, ERR_MSG, |_| async {
                panic!("service must not be called for blank input")
            }));
            assert!(!dispatched);
        }

        assert!(store.borrow().is_empty());
        assert!(!store.borrow().is_pending());
    }

    #[test]
    fn successful_response_appends_bot_turn_verbatim() {
        let store = RefCell::new(Conversation::new());

        let dispatched = block_on(dispatch(&store, "foo", ERR_MSG, |query| async move {
            assert_eq!(query, "foo");
            answer(
                "X",
                vec![Citation {
                    title: "T".into(),
                    url: "U".into(),
                    chunk_id: ChunkId::Number(1),
                    snippet: "S".into(),
                }],
            )
        }));
        assert!(dispatched);

        let conv = store.borrow();
        assert!(!conv.is_pending());
        assert_eq!(conv.turns().len(), 2);
        assert_eq!(conv.turns()[1].kind, TurnKind::Bot);
        assert_eq!(conv.turns()[1].text, "X");
        assert_eq!(
            conv.turns()[1].sources,
            vec![Citation {
                title: "T".into(),
                url: "U".into(),
                chunk_id: ChunkId::Number(1),
                snippet: "S".into(),
            }]
        );
    }

    #[test]
    fn failure_appends_one_error_turn_with_fixed_message() {
        let store = RefCell::new(Conversation::new());

        block_on(dispatch(&store, "foo", ERR_MSG, |_| async {
            Err(ApiError::Network("connection refused".into()))
        }));

        let conv = store.borrow();
        assert!(!conv.is_pending());
        assert_eq!(conv.turns().len(), 2);
        assert_eq!(conv.turns()[0].kind, TurnKind::User);
        assert_eq!(conv.turns()[0].text, "foo");
        assert_eq!(conv.turns()[1].kind, TurnKind::Error);
        assert_eq!(conv.turns()[1].text, ERR_MSG);
    }

    #[test]
    fn every_dispatched_query_gets_exactly_one_terminal_turn() {
        let store = RefCell::new(Conversation::new());

        block_on(dispatch(&store, "q1", ERR_MSG, |_| async {
            answer("a1", Vec::new())
        }));
        block_on(dispatch(&store, "q2", ERR_MSG, |_| async {
            Err(ApiError::Status(502))
        }));
        block_on(dispatch(&store, "q3", ERR_MSG, |_| async {
            answer("a3", Vec::new())
        }));

        let conv = store.borrow();
        let users = conv.turns().iter().filter(|t| t.kind == TurnKind::User).count();
        let terminal = conv
            .turns()
            .iter()
            .filter(|t| matches!(t.kind, TurnKind::Bot | TurnKind::Error))
            .count();
        assert_eq!(users, 3);
        assert_eq!(terminal, 3);
        assert!(!conv.is_pending());

        // Each terminal turn directly follows its user turn.
        for pair in conv.turns().chunks(2) {
            assert_eq!(pair[0].kind, TurnKind::User);
            assert_ne!(pair[1].kind, TurnKind::User);
        }
    }

    #[test]
    fn hvac_scenario_transcript() {
        let store = RefCell::new(Conversation::new());

        block_on(dispatch(
            &store,
            "What is an HVAC system?",
            ERR_MSG,
            |_| async { answer("An HVAC system...", Vec::new()) },
        ));

        let conv = store.borrow();
        assert!(!conv.is_pending());
        assert_eq!(conv.turns()[0].text, "What is an HVAC system?");
        assert_eq!(conv.turns()[1].text, "An HVAC system...");
        assert!(conv.turns()[1].sources.is_empty());
    }
}
