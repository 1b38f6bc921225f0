//! Chat session state and query routing.
//!
//! A [`ChatSession`] owns the current document text and the message history;
//! each user message is classified by [`classify`] and answered by the
//! matching analysis function.

pub mod intent;
pub mod session;

pub use intent::{classify, Intent};
pub use session::{chat_title, ChatSession, DocumentStatus, Reply};
