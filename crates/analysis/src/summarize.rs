//! Extractive summarization by aggregate word frequency.

use tracing::debug;

use crate::frequency::{build_word_freq, rank_sentences};
use crate::text::{normalize, split_sentences};

pub const DEFAULT_SUMMARY_SENTENCES: usize = 7;

/// Pick the `limit` highest-scoring distinct sentences of `text` and join
/// them with single spaces in document order. A repeated sentence appears
/// once, at its first position.
///
/// When the text has at most `limit` sentences the normalized text is
/// returned as-is.
pub fn summarize(text: &str, limit: usize) -> String {
    let text = normalize(text);
    let sentences = split_sentences(&text);
    if sentences.len() <= limit {
        return text;
    }

    let freq = build_word_freq(&text);
    let mut keep: Vec<usize> = rank_sentences(&sentences, &freq)
        .into_iter()
        .take(limit)
        .map(|s| s.index)
        .collect();
    keep.sort_unstable();

    debug!(
        total = sentences.len(),
        kept = keep.len(),
        vocabulary = freq.len(),
        "summarized document"
    );

    keep.iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
