use araba_asistani::format;
use leptos::prelude::*;

use crate::state::AppState;

/// Sidebar with the saved sessions, "New Chat" button and theme toggle.
#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let sidebar_open = state.sidebar_open;
    let dark_mode = state.dark_mode;
    let is_open = move || sidebar_open.get();

    let new_state = state.clone();
    let theme_state = state.clone();

    view! {
        <aside class="sidebar" class:collapsed=move || !is_open()>
            <div class="sidebar-header">
                <Show when=is_open>
                    <h2>"Sohbetler"</h2>
                </Show>
                <button class="sidebar-toggle" on:click=move |_| state.toggle_sidebar()>
                    {move || if is_open() { "‹" } else { "›" }}
                </button>
            </div>

            <Show when=is_open>
                <div class="new-chat">
                    <button
                        class="new-chat-btn"
                        on:click={
                            let state = new_state.clone();
                            move |_| state.new_session()
                        }
                    >
                        "+ Yeni Sohbet"
                    </button>
                </div>
            </Show>

            <div class="session-list">
                <Show when=is_open>
                    <SessionList />
                </Show>
            </div>

            <Show when=is_open>
                <div class="sidebar-footer">
                    <button
                        class="theme-toggle"
                        on:click={
                            let state = theme_state.clone();
                            move |_| state.toggle_dark_mode()
                        }
                    >
                        {move || if dark_mode.get() { "🌞 Açık Tema" } else { "🌙 Koyu Tema" }}
                    </button>
                </div>
            </Show>
        </aside>
    }
}

/// Saved sessions, newest first.
#[component]
fn SessionList() -> impl IntoView {
    let sessions = expect_context::<AppState>().sessions;

    move || {
        if sessions.get().is_empty() {
            view! {
                <div class="session-empty">
                    <div class="session-empty-icon">"💬"</div>
                    <p>"Henüz sohbet yok"</p>
                    <p class="hint">"Yeni bir sohbet başlatın"</p>
                </div>
            }
            .into_any()
        } else {
            view! {
                <For
                    each=move || sessions.get()
                    key=|s| (s.id.clone(), s.title.clone())
                    let:session
                >
                    {
                        let state = expect_context::<AppState>();
                        let active_session = state.active_session;
                        let id_click = session.id.clone();
                        let id_active = session.id.clone();
                        view! {
                            <div
                                class="session-item"
                                class:active=move || {
                                    active_session.get().as_deref() == Some(id_active.as_str())
                                }
                                on:click=move |_| state.select_session(id_click.clone())
                            >
                                <div class="session-title">{session.title.clone()}</div>
                                <div class="session-date">
                                    {format::session_date(session.created_at)}
                                </div>
                            </div>
                        }
                    }
                </For>
            }
            .into_any()
        }
    }
}
