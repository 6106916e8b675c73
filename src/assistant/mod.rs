use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{CarListing, Message};

/// Shown in place of a reply whenever the assistant call fails.
pub const FALLBACK_REPLY: &str = "Özür dilerim, bir hata oluştu. Lütfen tekrar deneyin.";

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantRequest {
    pub user_query: String,
    pub session_id: String,
}

/// Successful `/chat` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(default)]
    pub results: Vec<CarListing>,
}

impl AssistantReply {
    pub fn into_message(self) -> Message {
        Message::bot(self.response, self.results)
    }
}

/// One request/response exchange with the remote assistant.
///
/// Futures are not required to be `Send`; the browser transport runs on the
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait AssistantTransport {
    async fn send(&self, request: &AssistantRequest) -> Result<AssistantReply, AppError>;
}
