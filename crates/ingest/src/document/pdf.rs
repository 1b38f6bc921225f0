use std::panic;

use super::{ExtractionError, PageContent};

/// The header may be preceded by junk, but must appear in the first KiB.
const HEADER_SEARCH_WINDOW: usize = 1024;

fn has_pdf_header(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(HEADER_SEARCH_WINDOW)];
    window.windows(4).any(|w| w == b"%PDF")
}

pub fn extract_pages(bytes: &[u8]) -> Result<Vec<PageContent>, ExtractionError> {
    if !has_pdf_header(bytes) {
        return Err(ExtractionError::NotPdf);
    }

    // pdf-extract can panic on malformed object streams; keep that inside
    // the extractor.
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| ExtractionError::Panicked)?
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(i, text)| PageContent {
            page_number: i + 1,
            text: text.trim().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_detection() {
        assert!(has_pdf_header(b"%PDF-1.4\n"));
        assert!(has_pdf_header(b"\xEF\xBB\xBF%PDF-1.7"));
        assert!(!has_pdf_header(b"PK\x03\x04"));
        assert!(!has_pdf_header(b"%PD"));
    }
}
