//! Core of the car-assistant chat page: the persisted session store, the
//! chat turn service, the swipe controller for result cards and the display
//! helpers the Leptos frontend renders with. Nothing here depends on the
//! browser; storage and HTTP are supplied through traits.

pub mod assistant;
pub mod emphasis;
pub mod errors;
pub mod format;
pub mod models;
pub mod service;
pub mod store;
pub mod swipe;

pub use assistant::{AssistantReply, AssistantRequest, AssistantTransport, FALLBACK_REPLY};
pub use errors::AppError;
pub use models::{CarListing, ChatSession, Message, Sender};
pub use service::{ChatService, PendingTurn};
pub use store::{MemoryStorage, SessionStorage, SessionStore};
pub use swipe::{CardDeck, CardTransform, SwipeDirection, SwipeGesture};
