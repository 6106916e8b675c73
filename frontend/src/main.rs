mod api;
mod components;
mod config;
mod state;
mod storage;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use components::chat::ChatArea;
use components::sidebar::Sidebar;
use config::AppConfig;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("Assistant endpoint: {}", config.chat_endpoint());

    let state = AppState::provide(&config);
    let dark_mode = state.dark_mode;

    view! {
        <div class="app-container" class:dark=move || dark_mode.get()>
            <Sidebar />
            <ChatArea />
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
