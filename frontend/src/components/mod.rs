pub mod cards;
pub mod chat;
pub mod sidebar;
