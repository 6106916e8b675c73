pub mod session_store;
pub mod storage;

pub use session_store::{derive_title, SessionStore, DEFAULT_TITLE, STORAGE_KEY, TITLE_MAX_CHARS};
pub use storage::{MemoryStorage, SessionStorage};
