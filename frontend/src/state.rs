use araba_asistani::{ChatService, ChatSession, Message, SessionStore};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpAssistant;
use crate::config::AppConfig;
use crate::storage::BrowserStorage;

/// Shared application state, provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    // --- Read signals (for components to subscribe to) ---
    pub sessions: ReadSignal<Vec<ChatSession>>,
    pub active_session: ReadSignal<Option<String>>,
    pub messages: ReadSignal<Vec<Message>>,
    pub is_loading: ReadSignal<bool>,
    pub sidebar_open: ReadSignal<bool>,
    pub dark_mode: ReadSignal<bool>,

    // --- Write signals (for mutating state) ---
    set_sessions: WriteSignal<Vec<ChatSession>>,
    set_active_session: WriteSignal<Option<String>>,
    set_messages: WriteSignal<Vec<Message>>,
    set_is_loading: WriteSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
    set_dark_mode: WriteSignal<bool>,

    store: StoredValue<SessionStore<BrowserStorage>>,
    chat: ChatService<HttpAssistant>,
}

impl AppState {
    /// Create a new `AppState`, load persisted sessions and provide it in the
    /// current Leptos context.
    pub fn provide(config: &AppConfig) -> Self {
        let store = SessionStore::open(BrowserStorage);
        log::debug!("Restored {} chat sessions", store.sessions().len());

        let (sessions, set_sessions) = signal(store.sessions().to_vec());
        let (active_session, set_active_session) = signal(None::<String>);
        let (messages, set_messages) = signal(Vec::<Message>::new());
        let (is_loading, set_is_loading) = signal(false);
        let (sidebar_open, set_sidebar_open) = signal(true);
        let (dark_mode, set_dark_mode) = signal(false);

        let state = Self {
            sessions,
            active_session,
            messages,
            is_loading,
            sidebar_open,
            dark_mode,
            set_sessions,
            set_active_session,
            set_messages,
            set_is_loading,
            set_sidebar_open,
            set_dark_mode,
            store: StoredValue::new(store),
            chat: ChatService::new(HttpAssistant::new(config)),
        };

        provide_context(state.clone());
        state
    }

    /// Mirror the store's session list and selection into the signals.
    fn sync_sessions(&self) {
        let (sessions, active) = self.store.with_value(|store| {
            (store.sessions().to_vec(), store.active_id().map(str::to_string))
        });
        self.set_sessions.set(sessions);
        self.set_active_session.set(active);
    }

    /// Start an empty session and make it the active one.
    pub fn new_session(&self) {
        self.store.update_value(|store| {
            store.create_session();
        });
        self.set_messages.set(Vec::new());
        self.sync_sessions();
    }

    /// Select a session and show its messages.
    pub fn select_session(&self, id: String) {
        let selected = self
            .store
            .try_update_value(|store| store.select_session(&id).map(<[Message]>::to_vec));

        match selected {
            Some(Ok(msgs)) => {
                self.set_messages.set(msgs);
                self.sync_sessions();
            }
            Some(Err(e)) if e.is_not_found() => log::warn!("Ignoring stale selection: {e}"),
            Some(Err(e)) => log::error!("{e}"),
            None => log::error!("Session store disposed"),
        }
    }

    /// Send a message to the assistant. Ignored while a reply is pending.
    pub fn send_message(&self, text: String) {
        if self.chat.is_busy() {
            log::debug!("Reply pending, ignoring input");
            return;
        }

        let begun = self
            .store
            .try_update_value(|store| self.chat.begin(store, &text));

        let turn = match begun {
            Some(Ok(turn)) => turn,
            Some(Err(e)) if e.is_validation() => {
                log::debug!("Message not sent: {e}");
                return;
            }
            Some(Err(e)) => {
                log::error!("Message not sent: {e}");
                return;
            }
            None => return,
        };

        // Show the user message right away
        self.set_messages.set(turn.messages().to_vec());
        self.sync_sessions();
        self.set_is_loading.set(true);

        let state = self.clone();
        spawn_local(async move {
            let reply = state.chat.reply(&turn).await;
            let session_id = turn.session_id().to_string();
            let messages = state
                .store
                .try_update_value(|store| state.chat.finish(store, turn, reply));

            // The user may have moved to another session meanwhile
            if state.active_session.get_untracked().as_deref() == Some(session_id.as_str()) {
                if let Some(messages) = messages {
                    state.set_messages.set(messages);
                }
            }
            state.sync_sessions();
            state.set_is_loading.set(false);
        });
    }

    pub fn toggle_sidebar(&self) {
        self.set_sidebar_open.update(|open| *open = !*open);
    }

    pub fn toggle_dark_mode(&self) {
        self.set_dark_mode.update(|dark| *dark = !*dark);
    }
}
