use thiserror::Error;

/// Top-level error for the chat client core.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Storage errors ───────────────────────────────────────────────────────
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Failed to write '{key}' to storage: {message}")]
    StorageWriteFailed { key: String, message: String },

    #[error("Persisted sessions under '{key}' are corrupt")]
    CorruptSessions {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Skipping unreadable session #{index}")]
    UnreadableSession {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize sessions: {0}")]
    SerializeSessions(#[source] serde_json::Error),

    // ── Session errors ───────────────────────────────────────────────────────
    #[error("Session '{id}' not found")]
    SessionNotFound { id: String },

    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("A request to the assistant is already in flight")]
    RequestInFlight,

    // ── Assistant errors ─────────────────────────────────────────────────────
    #[error("Assistant unreachable: {message}")]
    AssistantUnavailable { message: String },

    #[error("Assistant responded with status {status}")]
    AssistantStatus { status: u16 },

    #[error("Assistant response could not be parsed: {message}")]
    InvalidResponse { message: String },

    #[error("Assistant did not answer within {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },
}

impl AppError {
    pub fn empty_field(field_name: impl Into<String>) -> Self {
        AppError::EmptyField { field_name: field_name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::SessionNotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::EmptyField { .. } | AppError::RequestInFlight)
    }

    /// Failures of the remote assistant call; these are replaced by the
    /// fallback reply rather than surfaced.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            AppError::AssistantUnavailable { .. }
                | AppError::AssistantStatus { .. }
                | AppError::InvalidResponse { .. }
                | AppError::Timeout { .. }
        )
    }
}
