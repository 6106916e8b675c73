use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ChatSession, Message};
use crate::store::storage::SessionStorage;

/// Storage entry holding the serialized session list.
pub const STORAGE_KEY: &str = "chatSessions";
pub const DEFAULT_TITLE: &str = "Yeni Sohbet";
pub const TITLE_MAX_CHARS: usize = 30;
const TITLE_ELLIPSIS: &str = "...";
const ID_SUFFIX_LEN: usize = 9;

/// Title for a message list: the first message cut to [`TITLE_MAX_CHARS`]
/// characters plus `...`, or [`DEFAULT_TITLE`] while the list is empty.
pub fn derive_title(messages: &[Message]) -> String {
    match messages.first() {
        Some(first) => {
            let head: String = first.text.chars().take(TITLE_MAX_CHARS).collect();
            format!("{head}{TITLE_ELLIPSIS}")
        }
        None => DEFAULT_TITLE.to_string(),
    }
}

/// `session_<epoch millis>_<9 base-36 chars>`.
fn generate_session_id() -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut bits = Uuid::new_v4().as_u128();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| {
            let c = ALPHABET[(bits % 36) as usize] as char;
            bits /= 36;
            c
        })
        .collect();
    format!("session_{}_{suffix}", Utc::now().timestamp_millis())
}

/// Ordered collection of chat sessions plus the active selection, mirrored
/// wholesale into a [`SessionStorage`] entry on every change.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Reads the persisted sessions. Missing or unreadable state yields an
    /// empty list; a record that no longer parses is dropped on its own so
    /// the rest of the history survives.
    pub fn load_all(storage: &S) -> Vec<ChatSession> {
        let raw = match storage.read(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read chat sessions: {e}");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(records) => records,
            Err(source) => {
                let err = AppError::CorruptSessions { key: STORAGE_KEY.to_string(), source };
                warn!("{err}; starting with an empty history");
                return Vec::new();
            }
        };

        let total = records.len();
        let sessions: Vec<ChatSession> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<ChatSession>(record) {
                Ok(session) => Some(session),
                Err(source) => {
                    warn!("{}", AppError::UnreadableSession { index, source });
                    None
                }
            })
            .collect();
        debug!("Loaded {} of {total} chat sessions", sessions.len());
        sessions
    }

    pub fn open(storage: S) -> Self {
        let sessions = Self::load_all(&storage);
        Self { storage, sessions, active_id: None }
    }

    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&ChatSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn active_session(&self) -> Option<&ChatSession> {
        self.active_id.as_deref().and_then(|id| self.get(id))
    }

    /// Starts an empty session at the front of the list and makes it active.
    pub fn create_session(&mut self) -> ChatSession {
        let mut id = generate_session_id();
        while self.get(&id).is_some() {
            id = generate_session_id();
        }

        let session = ChatSession::new(id, DEFAULT_TITLE.to_string());
        self.sessions.insert(0, session.clone());
        self.active_id = Some(session.id.clone());
        self.persist();
        debug!("Created chat session {}", session.id);
        session
    }

    /// Activates `id` and returns its messages.
    pub fn select_session(&mut self, id: &str) -> Result<&[Message], AppError> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| AppError::SessionNotFound { id: id.to_string() })?;
        self.active_id = Some(id.to_string());
        Ok(&self.sessions[index].messages)
    }

    /// Replaces the message list of `active_id`, retitles and timestamps it,
    /// then rewrites the whole persisted collection.
    pub fn append_and_persist(
        &mut self,
        active_id: &str,
        messages: Vec<Message>,
    ) -> Result<(), AppError> {
        let session = self
            .sessions
            .iter_mut()
            .find(|s| s.id == active_id)
            .ok_or_else(|| AppError::SessionNotFound { id: active_id.to_string() })?;

        session.title = derive_title(&messages);
        session.messages = messages;
        session.updated_at = Some(Utc::now());
        self.persist();
        Ok(())
    }

    /// Write failures (quota, unavailable storage) are logged and dropped so
    /// the chat keeps working with in-memory state.
    fn persist(&self) {
        let result = serde_json::to_string(&self.sessions)
            .map_err(AppError::SerializeSessions)
            .and_then(|json| self.storage.write(STORAGE_KEY, &json));
        if let Err(e) = result {
            warn!("Failed to persist chat sessions: {e}");
        }
    }
}
