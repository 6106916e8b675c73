use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::assistant::{AssistantRequest, AssistantTransport, FALLBACK_REPLY};
use crate::errors::AppError;
use crate::models::Message;
use crate::store::{SessionStorage, SessionStore};

/// Marks a request as outstanding until dropped.
#[derive(Debug)]
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// A user message that has been accepted and is waiting for the assistant.
/// Holding it keeps further sends blocked.
#[derive(Debug)]
pub struct PendingTurn {
    session_id: String,
    query: String,
    messages: Vec<Message>,
    _guard: InFlightGuard,
}

impl PendingTurn {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Session history including the new user message.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

/// Drives one chat turn: user message in, one assistant call, bot message
/// appended and persisted.
#[derive(Debug, Clone)]
pub struct ChatService<T> {
    transport: T,
    in_flight: Arc<AtomicBool>,
}

impl<T: AssistantTransport> ChatService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport, in_flight: Arc::new(AtomicBool::new(false)) }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Accepts `text` for the active session, creating one if none is
    /// selected so the exchange is persisted. The text is kept as typed;
    /// whitespace only matters for rejecting blank input.
    pub fn begin<S: SessionStorage>(
        &self,
        store: &mut SessionStore<S>,
        text: &str,
    ) -> Result<PendingTurn, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::empty_field("message"));
        }
        let guard = InFlightGuard::acquire(&self.in_flight).ok_or(AppError::RequestInFlight)?;

        let session = match store.active_session().cloned() {
            Some(session) => session,
            None => store.create_session(),
        };

        let mut messages = session.messages;
        messages.push(Message::user(text));

        Ok(PendingTurn {
            session_id: session.id,
            query: text.to_string(),
            messages,
            _guard: guard,
        })
    }

    /// Calls the assistant. Any failure becomes the fixed fallback reply.
    pub async fn reply(&self, turn: &PendingTurn) -> Message {
        let request = AssistantRequest {
            user_query: turn.query().to_string(),
            session_id: turn.session_id.clone(),
        };

        match self.transport.send(&request).await {
            Ok(reply) => {
                debug!(
                    "Assistant answered session {} with {} results",
                    turn.session_id,
                    reply.results.len()
                );
                reply.into_message()
            }
            Err(e) => {
                if e.is_transport() {
                    warn!("Assistant request for session {} failed: {e}", turn.session_id);
                } else {
                    error!("Unexpected assistant error for session {}: {e}", turn.session_id);
                }
                Message::bot_text(FALLBACK_REPLY)
            }
        }
    }

    /// Appends `reply` to the turn's own session and persists it. Returns the
    /// session's full message list.
    pub fn finish<S: SessionStorage>(
        &self,
        store: &mut SessionStore<S>,
        turn: PendingTurn,
        reply: Message,
    ) -> Vec<Message> {
        let PendingTurn { session_id, mut messages, .. } = turn;
        messages.push(reply);
        if let Err(e) = store.append_and_persist(&session_id, messages.clone()) {
            error!("Failed to record reply for session {session_id}: {e}");
        }
        messages
    }

    /// `begin`, `reply` and `finish` in one call, for callers that can hold
    /// the store across the request.
    pub async fn send<S: SessionStorage>(
        &self,
        store: &mut SessionStore<S>,
        text: &str,
    ) -> Result<Vec<Message>, AppError> {
        let turn = self.begin(store, text)?;
        let reply = self.reply(&turn).await;
        Ok(self.finish(store, turn, reply))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::AssistantReply;
    use crate::store::MemoryStorage;

    struct Unreachable;

    impl AssistantTransport for Unreachable {
        async fn send(&self, _request: &AssistantRequest) -> Result<AssistantReply, AppError> {
            Err(AppError::AssistantUnavailable { message: "offline".into() })
        }
    }

    #[test]
    fn blank_input_is_rejected() {
        let service = ChatService::new(Unreachable);
        let mut store = SessionStore::open(MemoryStorage::new());
        let err = service.begin(&mut store, "   \n").unwrap_err();
        assert!(err.is_validation());
        assert!(store.sessions().is_empty());
        assert!(!service.is_busy());
    }

    #[test]
    fn only_one_turn_in_flight() {
        let service = ChatService::new(Unreachable);
        let mut store = SessionStore::open(MemoryStorage::new());

        let turn = service.begin(&mut store, "SUV").unwrap();
        assert!(service.is_busy());
        let err = service.begin(&mut store, "Sedan").unwrap_err();
        assert!(matches!(err, AppError::RequestInFlight));

        drop(turn);
        assert!(!service.is_busy());
        assert!(service.begin(&mut store, "Sedan").is_ok());
    }

    #[test]
    fn begin_creates_a_session_when_none_is_active() {
        let service = ChatService::new(Unreachable);
        let mut store = SessionStore::open(MemoryStorage::new());
        let turn = service.begin(&mut store, "Kırmızı araba").unwrap();

        assert_eq!(store.active_id(), Some(turn.session_id()));
        assert_eq!(turn.query(), "Kırmızı araba");
        assert_eq!(turn.messages(), &[Message::user("Kırmızı araba")]);
    }

    #[tokio::test]
    async fn input_is_sent_and_titled_as_typed() {
        let service = ChatService::new(Unreachable);
        let mut store = SessionStore::open(MemoryStorage::new());

        let turn = service.begin(&mut store, "  SUV\n").unwrap();
        assert_eq!(turn.query(), "  SUV\n");
        let reply = service.reply(&turn).await;
        let messages = service.finish(&mut store, turn, reply);

        assert_eq!(messages[0], Message::user("  SUV\n"));
        assert_eq!(store.active_session().unwrap().title, "  SUV\n...");
    }

    #[test]
    fn begin_extends_the_active_session() {
        let service = ChatService::new(Unreachable);
        let mut store = SessionStore::open(MemoryStorage::new());
        let session = store.create_session();
        store
            .append_and_persist(&session.id, vec![Message::user("a"), Message::bot_text("b")])
            .unwrap();

        let turn = service.begin(&mut store, "c").unwrap();
        assert_eq!(turn.session_id(), session.id);
        assert_eq!(turn.messages().len(), 3);
        assert_eq!(store.sessions().len(), 1);
    }
}
