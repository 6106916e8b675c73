/// Assistant backend used when no `ARABA_API_BASE` was set at build time.
const DEFAULT_API_BASE: &str = "http://localhost:8000";
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Settings baked in by `build.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    pub fn from_build_env() -> Self {
        let api_base = option_env!("ARABA_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE);
        let request_timeout_ms = option_env!("ARABA_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            request_timeout_ms,
        }
    }

    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_base)
    }
}
