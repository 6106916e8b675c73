use araba_asistani::{AppError, SessionStorage};
use wasm_bindgen::JsValue;

/// `window.localStorage`. Looked up per call so the handle stays `Send` and
/// a page without storage access degrades to in-memory state.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::StorageUnavailable {
            message: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| AppError::StorageUnavailable { message: js_message(&e) })?
            .ok_or_else(|| AppError::StorageUnavailable {
                message: "localStorage disabled".to_string(),
            })
    }
}

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| AppError::StorageUnavailable { message: js_message(&e) })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| AppError::StorageWriteFailed {
                key: key.to_string(),
                message: js_message(&e),
            })
    }
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
