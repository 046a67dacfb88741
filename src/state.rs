use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::AppConfig;
use crate::conversation::Conversation;
use crate::dispatcher::{self, ConversationHandle};

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,

    /// The transcript and pending flag, for components to subscribe to.
    pub conversation: ReadSignal<Conversation>,

    /// Text currently in the composer input.
    pub composer: ReadSignal<String>,
    pub set_composer: WriteSignal<String>,

    set_conversation: WriteSignal<Conversation>,
}

/// Adapter so the dispatcher can mutate the store through the write signal.
struct SignalHandle(WriteSignal<Conversation>);

impl ConversationHandle for SignalHandle {
    fn update(&self, f: impl FnOnce(&mut Conversation)) {
        self.0.update(f);
    }
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(config: AppConfig) -> Self {
        let (conversation, set_conversation) = signal(Conversation::new());
        let (composer, set_composer) = signal(String::new());

        let state = Self {
            config,
            conversation,
            composer,
            set_composer,
            set_conversation,
        };

        provide_context(state.clone());
        state
    }

    /// Submits whatever is currently in the composer. No-op while a request
    /// is outstanding (the input is disabled then anyway) or when the
    /// trimmed text is empty.
    pub fn submit(&self) {
        if self.conversation.with_untracked(|c| c.is_pending()) {
            return;
        }
        let raw = self.composer.get_untracked();
        if raw.trim().is_empty() {
            return;
        }

        let handle = SignalHandle(self.set_conversation);
        let endpoint = self.config.endpoint.clone();
        let error_message = self.config.error_message;
        let set_composer = self.set_composer;

        spawn_local(async move {
            dispatcher::dispatch(&handle, &raw, error_message, move |query| async move {
                api::ask(&endpoint, &query).await
            })
            .await;

            // The query used for the request was captured above; only the
            // composer text is discarded here.
            set_composer.set(String::new());
        });
    }
}
