use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use pdfchat_analysis::{answer_with, format_qa, generate_qa, normalize, prepare_chunks, summarize};
use pdfchat_core::{AnalysisConfig, ChatMessage};

use crate::intent::{classify, Intent};

pub const WELCOME_MESSAGE: &str = "Hi! Upload a PDF and ask me anything about it.";
pub const UPLOAD_FIRST_MESSAGE: &str = "Upload PDF first.";
pub const ANSWER_UPLOAD_MESSAGE: &str = "Upload a PDF and I will answer from it.";
pub const NO_QUESTIONS_MESSAGE: &str = "I couldn't find enough content to generate questions.";

const DEFAULT_TITLE: &str = "New Chat";
const TITLE_MAX_CHARS: usize = 25;

/// Assistant response to one user query.
#[derive(Debug, Clone, Serialize)]
pub struct Reply {
    pub intent: Intent,
    pub text: String,
}

/// What is currently loaded in a session.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentStatus {
    pub loaded: bool,
    pub pdf_name: Option<String>,
    pub title: String,
    pub word_count: usize,
    pub chunk_count: usize,
}

/// Session title for an uploaded file: the name without its `.pdf` suffix,
/// cut to 25 characters plus `...` when longer.
pub fn chat_title(filename: &str) -> String {
    let cut = filename.len().saturating_sub(4);
    let base = if filename.is_char_boundary(cut) && filename[cut..].eq_ignore_ascii_case(".pdf") {
        &filename[..cut]
    } else {
        filename
    };
    if base.chars().count() > TITLE_MAX_CHARS {
        let truncated: String = base.chars().take(TITLE_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        base.to_string()
    }
}

/// One user's document and chat history.
///
/// The document text is either empty (nothing loaded) or the normalized text
/// of the last upload; every upload replaces it wholesale. Messages are
/// append-only until [`ChatSession::reset`].
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    title: String,
    pdf_name: Option<String>,
    document_text: String,
    chunk_count: usize,
    messages: Vec<ChatMessage>,
    settings: AnalysisConfig,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

impl ChatSession {
    /// Empty document and a single welcome message.
    pub fn new(settings: AnalysisConfig) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: DEFAULT_TITLE.to_string(),
            pdf_name: None,
            document_text: String::new(),
            chunk_count: 0,
            messages: vec![ChatMessage::assistant(WELCOME_MESSAGE)],
            settings,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pdf_name(&self) -> Option<&str> {
        self.pdf_name.as_deref()
    }

    pub fn document_text(&self) -> &str {
        &self.document_text
    }

    pub fn has_document(&self) -> bool {
        !self.document_text.is_empty()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn settings(&self) -> &AnalysisConfig {
        &self.settings
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn status(&self) -> DocumentStatus {
        DocumentStatus {
            loaded: self.has_document(),
            pdf_name: self.pdf_name.clone(),
            title: self.title.clone(),
            word_count: self.document_text.split_whitespace().count(),
            chunk_count: self.chunk_count,
        }
    }

    /// Replace the document with the text of a PDF and acknowledge it in the
    /// history. An unreadable PDF leaves the session with no document.
    pub fn upload_pdf(&mut self, filename: &str, bytes: &[u8]) -> &ChatMessage {
        let text = pdfchat_ingest::extract_plain_text(bytes);
        self.load_text(filename, &text)
    }

    /// Replace the document with already-extracted text.
    pub fn load_text(&mut self, filename: &str, raw_text: &str) -> &ChatMessage {
        self.document_text = normalize(raw_text);
        self.chunk_count = prepare_chunks(&self.document_text, self.settings.chunk_words).len();
        self.pdf_name = Some(filename.to_string());
        self.title = chat_title(filename);

        let ack = if self.has_document() {
            info!(
                file = filename,
                chars = self.document_text.len(),
                chunks = self.chunk_count,
                "document loaded"
            );
            format!(
                "I've loaded \"{filename}\" successfully! It contains {} sections of content. \
                 Feel free to ask me anything about the document.",
                self.chunk_count
            )
        } else {
            info!(file = filename, "uploaded document has no readable text");
            format!("I couldn't read any text from \"{filename}\". Please try another file.")
        };
        self.push(ChatMessage::assistant(ack))
    }

    /// Compute the reply to `query` against the current document without
    /// touching the history.
    pub fn respond(&self, query: &str) -> Reply {
        let intent = classify(query);
        debug!(?intent, "routing query");

        let text = if !self.has_document() {
            match intent {
                Intent::Answer => ANSWER_UPLOAD_MESSAGE.to_string(),
                Intent::Summarize | Intent::GenerateQuestions => UPLOAD_FIRST_MESSAGE.to_string(),
            }
        } else {
            match intent {
                Intent::Summarize => {
                    summarize(&self.document_text, self.settings.summary_sentences)
                }
                Intent::GenerateQuestions => {
                    let pairs = generate_qa(&self.document_text, self.settings.qa_pairs);
                    if pairs.is_empty() {
                        NO_QUESTIONS_MESSAGE.to_string()
                    } else {
                        format_qa(&pairs)
                    }
                }
                Intent::Answer => {
                    answer_with(query, &self.document_text, self.settings.chunk_words)
                }
            }
        };
        Reply { intent, text }
    }

    /// Record a user message and exactly one assistant reply.
    pub fn send(&mut self, input: &str) -> Reply {
        self.push(ChatMessage::user(input));
        let reply = self.respond(input);
        self.push(ChatMessage::assistant(reply.text.clone()));
        reply
    }

    /// Back to an empty document and the welcome message.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        self.updated_at = Utc::now();
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfchat_core::Role;

    const DOC: &str = "TCP is a reliable transport protocol. UDP is a connectionless protocol.";

    #[test]
    fn new_session_has_single_welcome_message() {
        let session = ChatSession::default();
        assert!(!session.has_document());
        assert_eq!(session.document_text(), "");
        assert_eq!(session.title(), "New Chat");
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    }

    #[test]
    fn no_document_messages_per_intent() {
        let session = ChatSession::default();
        assert_eq!(session.respond("summary please").text, UPLOAD_FIRST_MESSAGE);
        assert_eq!(session.respond("important questions").text, UPLOAD_FIRST_MESSAGE);
        assert_eq!(session.respond("what is TCP?").text, ANSWER_UPLOAD_MESSAGE);
    }

    #[test]
    fn load_text_normalizes_and_acknowledges() {
        let mut session = ChatSession::default();
        let ack = session.load_text("notes.pdf", "  TCP  is\n\na protocol.  ").content.clone();
        assert_eq!(session.document_text(), "TCP is a protocol.");
        assert!(ack.contains("\"notes.pdf\""));
        assert!(ack.contains("1 sections"));
        assert_eq!(session.title(), "notes");
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn upload_replaces_document_wholesale() {
        let mut session = ChatSession::default();
        session.load_text("a.pdf", DOC);
        session.load_text("b.pdf", "Completely different text.");
        assert_eq!(session.document_text(), "Completely different text.");
        assert_eq!(session.pdf_name(), Some("b.pdf"));
    }

    #[test]
    fn unreadable_upload_clears_document() {
        let mut session = ChatSession::default();
        session.load_text("a.pdf", DOC);
        let ack = session.upload_pdf("broken.pdf", b"definitely not a pdf").content.clone();
        assert!(!session.has_document());
        assert!(ack.contains("couldn't read any text"));
        assert_eq!(session.status().chunk_count, 0);
    }

    #[test]
    fn send_appends_user_and_assistant() {
        let mut session = ChatSession::default();
        session.load_text("net.pdf", DOC);
        let before = session.messages().len();
        let reply = session.send("what is TCP?");
        assert_eq!(reply.intent, Intent::Answer);
        assert!(reply.text.starts_with("> "));

        let messages = session.messages();
        assert_eq!(messages.len(), before + 2);
        assert_eq!(messages[before].role, Role::User);
        assert_eq!(messages[before].content, "what is TCP?");
        assert_eq!(messages[before + 1].role, Role::Assistant);
        assert_eq!(messages[before + 1].content, reply.text);
    }

    #[test]
    fn question_request_without_keywords_gets_message() {
        let mut session = ChatSession::default();
        session.load_text("tiny.pdf", "It is so. Be it.");
        let reply = session.send("generate questions");
        assert_eq!(reply.intent, Intent::GenerateQuestions);
        assert_eq!(reply.text, NO_QUESTIONS_MESSAGE);
    }

    #[test]
    fn settings_drive_question_count() {
        let settings = AnalysisConfig { qa_pairs: 1, ..AnalysisConfig::default() };
        let mut session = ChatSession::new(settings);
        session.load_text(
            "os.pdf",
            "Paging splits memory. Threads share memory. Kernels schedule threads.",
        );
        let reply = session.send("important questions");
        assert!(reply.text.starts_with("Q1: "));
        assert!(!reply.text.contains("Q2: "));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut session = ChatSession::default();
        session.load_text("net.pdf", DOC);
        session.send("what is TCP?");
        let old_id = session.id();
        session.reset();
        assert!(!session.has_document());
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.title(), "New Chat");
        assert_ne!(session.id(), old_id);
    }

    #[test]
    fn title_strips_extension_and_truncates() {
        assert_eq!(chat_title("Report.PDF"), "Report");
        assert_eq!(chat_title("notes.txt"), "notes.txt");
        assert_eq!(
            chat_title("operating-systems-lecture-notes-week-12.pdf"),
            "operating-systems-lecture..."
        );
        assert_eq!(chat_title(".pdf"), "");
    }
}
