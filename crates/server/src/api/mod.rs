//! HTTP endpoints grouped by concern.
//!
//! Handlers return `(StatusCode, String)` on failure.

mod chat;
mod document;
mod health;

pub use chat::{chat, history, reset};
pub use document::{document, upload};
pub use health::{config, health};
