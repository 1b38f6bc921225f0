pub mod document;

pub use document::{
    extract_pdf, extract_plain_text, ExtractedDocument, ExtractionError, PageContent,
};
