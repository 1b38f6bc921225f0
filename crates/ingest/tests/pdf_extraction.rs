//! Extraction of a real two-page PDF through `pdf-extract`.

use pdfchat_ingest::{extract_pdf, extract_plain_text};

const TWO_PAGES: &[u8] = include_bytes!("fixtures/two_pages.pdf");

#[test]
fn pages_come_back_in_order() {
    let doc = extract_pdf(TWO_PAGES).unwrap();
    assert_eq!(doc.pages.len(), 2);
    assert_eq!(doc.pages[0].page_number, 1);
    assert_eq!(doc.pages[0].text, "TCP is a reliable protocol.");
    assert_eq!(doc.pages[1].page_number, 2);
    assert_eq!(doc.pages[1].text, "UDP is connectionless.");
}

#[test]
fn plain_text_joins_pages_with_newline() {
    assert_eq!(
        extract_plain_text(TWO_PAGES),
        "TCP is a reliable protocol.\nUDP is connectionless."
    );
}
