mod api;
mod components;
mod config;
mod conversation;
mod dispatcher;
mod models;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatPanel;
use config::AppConfig;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let state = AppState::provide(AppConfig::default());
    let title = state.config.title;
    let subtitle = state.config.subtitle;

    view! {
        <div class="app">
            <header class="app-header">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </header>
            <ChatPanel />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
