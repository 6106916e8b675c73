use araba_asistani::{AppError, AssistantReply, AssistantRequest, AssistantTransport};
use futures_util::future::{select, Either};
use futures_util::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

use crate::config::AppConfig;

/// `POST /chat` against the assistant backend.
#[derive(Clone, Debug)]
pub struct HttpAssistant {
    endpoint: String,
    timeout_ms: u32,
}

impl HttpAssistant {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoint: config.chat_endpoint(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    async fn post(&self, request: &AssistantRequest) -> Result<AssistantReply, AppError> {
        let resp = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| AppError::InvalidResponse { message: format!("Serialize error: {e}") })?
            .send()
            .await
            .map_err(|e| AppError::AssistantUnavailable { message: e.to_string() })?;

        if !resp.ok() {
            return Err(AppError::AssistantStatus { status: resp.status() });
        }

        resp.json::<AssistantReply>()
            .await
            .map_err(|e| AppError::InvalidResponse { message: e.to_string() })
    }
}

impl AssistantTransport for HttpAssistant {
    async fn send(&self, request: &AssistantRequest) -> Result<AssistantReply, AppError> {
        let call = self.post(request);
        let timeout = TimeoutFuture::new(self.timeout_ms);
        pin_mut!(call, timeout);

        match select(call, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(AppError::Timeout { timeout_ms: self.timeout_ms }),
        }
    }
}
