use tokio::sync::Mutex;

use pdfchat_chat::ChatSession;
use pdfchat_core::Config;

/// Shared server state: the resolved config and the single chat session.
///
/// The session sits behind a mutex so requests are applied one at a time.
pub struct AppState {
    pub config: Config,
    pub session: Mutex<ChatSession>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let session = ChatSession::new(config.analysis);
        Self {
            config,
            session: Mutex::new(session),
        }
    }
}
