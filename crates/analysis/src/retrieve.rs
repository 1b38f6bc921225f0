//! Term-overlap answer retrieval over document chunks.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::debug;

use crate::chunker::{prepare_chunks, DEFAULT_CHUNK_WORDS};
use crate::stopwords::is_stopword;
use crate::text::words;

pub const NO_DOCUMENT_MESSAGE: &str = "Upload a PDF first.";
pub const NOT_FOUND_MESSAGE: &str = "I couldn't find that in the PDF.";
pub const EXCERPT_PREFIX: &str = "> ";

/// Best-scoring chunk for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalHit {
    /// Position of the chunk within the document.
    pub index: usize,
    /// Number of distinct query terms present in the chunk.
    pub score: usize,
    pub chunk: String,
}

/// Distinct lowercase non-stopword terms of `query`, first occurrence order.
fn query_terms(query: &str) -> IndexSet<String> {
    let lowered = query.to_lowercase();
    words(&lowered)
        .filter(|w| !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Score every chunk of `text` against the query terms and return the first
/// chunk with the highest score. Returns `None` only when `text` has no words.
pub fn best_chunk(query: &str, text: &str, chunk_words: usize) -> Option<RetrievalHit> {
    let terms = query_terms(query);
    let mut best: Option<RetrievalHit> = None;

    for (index, chunk) in prepare_chunks(text, chunk_words).into_iter().enumerate() {
        let lowered = chunk.to_lowercase();
        let vocab: HashSet<&str> = words(&lowered).collect();
        let score = terms.iter().filter(|t| vocab.contains(t.as_str())).count();

        // Strictly greater, so the earliest chunk wins a tie.
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(RetrievalHit { index, score, chunk });
        }
    }
    best
}

/// Answer `query` from `text` with the default chunk size.
pub fn answer(query: &str, text: &str) -> String {
    answer_with(query, text, DEFAULT_CHUNK_WORDS)
}

/// Answer `query` with the best matching chunk of `text`, quoted.
pub fn answer_with(query: &str, text: &str, chunk_words: usize) -> String {
    if text.is_empty() {
        return NO_DOCUMENT_MESSAGE.to_string();
    }

    match best_chunk(query, text, chunk_words) {
        Some(hit) if hit.score > 0 => {
            debug!(chunk = hit.index, score = hit.score, "retrieved answer chunk");
            format!("{EXCERPT_PREFIX}{}", hit.chunk)
        }
        _ => {
            debug!("no chunk matched query terms");
            NOT_FOUND_MESSAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_asks_for_upload() {
        assert_eq!(answer("what is TCP?", ""), "Upload a PDF first.");
    }

    #[test]
    fn matching_query_returns_quoted_excerpt() {
        let reply = answer("what is TCP?", "TCP is a protocol. UDP is different.");
        assert!(reply.starts_with("> "));
        assert!(reply.contains("TCP"));
    }

    #[test]
    fn unrelated_query_is_not_found() {
        let reply = answer("explain deadlock", "TCP is a protocol. UDP is different.");
        assert_eq!(reply, "I couldn't find that in the PDF.");
    }

    #[test]
    fn stopword_only_query_is_not_found() {
        let reply = answer("is it the", "It is the protocol.");
        assert_eq!(reply, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn whitespace_only_document_is_not_found() {
        assert_eq!(answer("tcp", "   "), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn picks_chunk_with_most_distinct_terms() {
        let text = "alpha filler filler beta gamma filler";
        let hit = best_chunk("gamma beta", text, 3).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.score, 2);
        assert_eq!(hit.chunk, "beta gamma filler");
    }

    #[test]
    fn repeated_terms_count_once() {
        // Chunk 0 repeats "alpha"; chunk 1 has two distinct terms once each.
        let text = "alpha alpha alpha beta gamma x";
        let hit = best_chunk("alpha alpha gamma beta", text, 3).unwrap();
        assert_eq!(hit.index, 1);
        assert_eq!(hit.score, 2);
    }

    #[test]
    fn first_chunk_wins_ties() {
        let text = "router one two router three four";
        let hit = best_chunk("router", text, 3).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = answer_with("DEADLOCK", "Threads can deadlock easily.", 180);
        assert_eq!(reply, "> Threads can deadlock easily.");
    }
}
