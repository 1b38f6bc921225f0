mod pdf;

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Not a PDF file (missing %PDF header)")]
    NotPdf,
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("PDF parser panicked on malformed input")]
    Panicked,
}

/// A page of extracted text.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    /// The extracted text content; empty when the page has no text layer.
    pub text: String,
}

/// Result of extracting text from a PDF.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    pub pages: Vec<PageContent>,
}

impl ExtractedDocument {
    /// All page texts joined with a newline, in page order.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Total character count across all pages.
    pub fn total_chars(&self) -> usize {
        self.pages.iter().map(|p| p.text.chars().count()).sum()
    }
}

/// Extract every page of a PDF held in memory.
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let pages = pdf::extract_pages(bytes)?;
    Ok(ExtractedDocument { pages })
}

/// Plain text of a PDF, or `""` when it cannot be read.
///
/// Extraction failures are logged and otherwise indistinguishable from a PDF
/// without any text.
pub fn extract_plain_text(bytes: &[u8]) -> String {
    match extract_pdf(bytes) {
        Ok(doc) => {
            info!(
                pages = doc.pages.len(),
                chars = doc.total_chars(),
                "extracted PDF text"
            );
            doc.full_text()
        }
        Err(e) => {
            warn!(error = %e, bytes = bytes.len(), "PDF extraction failed, treating as empty");
            String::new()
        }
    }
}
