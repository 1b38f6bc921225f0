//! Keyword/sentence question-answer pairs built from the top-scoring sentences.

use crate::frequency::{build_word_freq, rank_sentences};
use crate::stopwords::is_stopword;
use crate::text::{normalize, split_sentences, words};

pub const DEFAULT_QA_PAIRS: usize = 5;

/// Keywords must be longer than this many characters.
const MIN_KEYWORD_CHARS: usize = 4;

/// A prompt keyword and the sentence that answers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaPair {
    pub keyword: String,
    pub sentence: String,
}

/// Longest non-stopword token of `sentence` with more than four characters.
/// The first one wins when several share the maximum length.
fn keyword_of(sentence: &str) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for w in words(sentence) {
        let len = w.chars().count();
        if len <= MIN_KEYWORD_CHARS || is_stopword(&w.to_lowercase()) {
            continue;
        }
        if best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((w, len));
        }
    }
    best.map(|(w, _)| w)
}

/// Generate up to `count` pairs, walking distinct sentences from highest to
/// lowest frequency score. Sentences without a qualifying keyword are skipped
/// and do not count toward `count`.
pub fn generate_qa(text: &str, count: usize) -> Vec<QaPair> {
    let text = normalize(text);
    let sentences = split_sentences(&text);
    if sentences.is_empty() {
        return Vec::new();
    }

    let freq = build_word_freq(&text);
    let mut pairs = Vec::new();
    for scored in rank_sentences(&sentences, &freq) {
        if pairs.len() >= count {
            break;
        }
        let sentence = &sentences[scored.index];
        if let Some(keyword) = keyword_of(sentence) {
            pairs.push(QaPair {
                keyword: keyword.to_string(),
                sentence: sentence.clone(),
            });
        }
    }
    pairs
}

/// Render pairs as numbered `Q<n>:` / `A:` lines.
pub fn format_qa(pairs: &[QaPair]) -> String {
    pairs
        .iter()
        .enumerate()
        .map(|(i, p)| format!("Q{}: {}\nA: {}", i + 1, p.keyword, p.sentence))
        .collect::<Vec<_>>()
        .join("\n")
}
