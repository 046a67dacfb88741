use leptos::ev;
use leptos::prelude::*;

use crate::models::{Citation, Turn, TurnKind};
use crate::state::AppState;

/// Chat panel: transcript, loading indicator, and the composer form.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let state = expect_context::<AppState>();
    let conversation = state.conversation;

    view! {
        <div class="chat-container">
            <div class="messages">
                {move || {
                    conversation.with(|conv| {
                        if conv.is_empty() {
                            view! { <Welcome /> }.into_any()
                        } else {
                            conv.turns()
                                .iter()
                                .cloned()
                                .map(|turn| view! { <TurnView turn /> })
                                .collect_view()
                                .into_any()
                        }
                    })
                }}
                // While a request is outstanding, a typing indicator stands
                // in for the upcoming bot/error turn.
                {move || {
                    conversation
                        .with(|conv| conv.is_pending())
                        .then(|| view! { <LoadingIndicator /> })
                }}
            </div>
            <ComposerForm />
        </div>
    }
}

/// One transcript entry. Bot answers arrive as markup the answering service
/// is contractually required to have sanitized upstream, so they render as
/// HTML; user queries and error notices render as plain text.
#[component]
fn TurnView(turn: Turn) -> impl IntoView {
    let Turn { kind, text, sources } = turn;

    let css_class = match kind {
        TurnKind::User => "message user-message",
        TurnKind::Bot => "message bot-message",
        TurnKind::Error => "message error-message",
    };

    let body = match kind {
        TurnKind::Bot => view! { <div inner_html=text /> }.into_any(),
        TurnKind::User | TurnKind::Error => view! { <span>{text}</span> }.into_any(),
    };

    view! {
        <div class=css_class>
            <div class="message-content">
                {body}
                {(!sources.is_empty()).then(|| view! { <SourceList sources /> })}
            </div>
        </div>
    }
}

/// Citations under a bot answer: title links out, chunk id and snippet are
/// plain text.
#[component]
fn SourceList(sources: Vec<Citation>) -> impl IntoView {
    view! {
        <div class="sources">
            <strong>"Sources:"</strong>
            {sources
                .into_iter()
                .map(|source| {
                    view! {
                        <div class="source-item">
                            <a href=source.url target="_blank" rel="noopener noreferrer">
                                {source.title}
                            </a>
                            <span class="chunk-id">{format!(" (chunk {})", source.chunk_id)}</span>
                            <p class="snippet">{source.snippet}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Welcome block shown while the transcript is empty, with one-click sample
/// questions that fill the composer.
#[component]
fn Welcome() -> impl IntoView {
    let state = expect_context::<AppState>();
    let set_composer = state.set_composer;

    view! {
        <div class="welcome-message">
            <h3>"Welcome! How can I help you with HVAC design today?"</h3>
            <div class="sample-questions">
                {state
                    .config
                    .sample_queries
                    .iter()
                    .map(|query| {
                        let query = *query;
                        view! {
                            <button on:click=move |_| set_composer.set(query.to_string())>
                                {format!("Sample: {query}")}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Typing indicator rendered where the next bot turn will appear.
#[component]
fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="message bot-message">
            <div class="message-content loading">
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
                "Analyzing HVAC documents…"
            </div>
        </div>
    }
}

/// Composer form. The input is disabled while a request is outstanding,
/// which is what keeps submissions strictly sequential.
#[component]
fn ComposerForm() -> impl IntoView {
    let state = expect_context::<AppState>();
    let conversation = state.conversation;
    let composer = state.composer;
    let set_composer = state.set_composer;

    let pending = move || conversation.with(|conv| conv.is_pending());
    let blank = move || composer.with(|text| text.trim().is_empty());

    let on_submit = {
        let state = state.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            state.submit();
        }
    };

    view! {
        <form class="input-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Ask your HVAC question here…"
                prop:value=composer
                on:input=move |ev| set_composer.set(event_target_value(&ev))
                disabled=pending
            />
            <button type="submit" disabled=move || pending() || blank()>
                "Send"
            </button>
        </form>
    }
}
