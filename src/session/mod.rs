pub mod conversation;
pub mod manager;

pub use conversation::ConversationBuffer;
pub use manager::{Session, SessionManager, DEFAULT_SESSION};
