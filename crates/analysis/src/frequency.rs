//! Word-frequency map and frequency-based sentence scoring.

use std::collections::{HashMap, HashSet};

use crate::stopwords::is_stopword;
use crate::text::words;

/// Lowercase word -> occurrence count. Never contains a stopword.
pub type FrequencyMap = HashMap<String, usize>;

/// Count lowercase word tokens of `text`, skipping stopwords.
pub fn build_word_freq(text: &str) -> FrequencyMap {
    let lowered = text.to_lowercase();
    let mut freq = FrequencyMap::new();
    for w in words(&lowered).filter(|w| !is_stopword(w)) {
        *freq.entry(w.to_string()).or_insert(0) += 1;
    }
    freq
}

/// Sum of the frequencies of every word in `sentence`; stopwords add nothing.
pub fn score_sentence(sentence: &str, freq: &FrequencyMap) -> usize {
    let lowered = sentence.to_lowercase();
    words(&lowered)
        .map(|w| freq.get(w).copied().unwrap_or(0))
        .sum()
}

/// A sentence position paired with its frequency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredSentence {
    /// Index into the sentence slice that was ranked.
    pub index: usize,
    pub score: usize,
}

/// Score every distinct sentence and order them by descending score.
///
/// A repeated sentence is ranked once, at its first position. Equal scores
/// keep document order (lower index first).
pub fn rank_sentences(sentences: &[String], freq: &FrequencyMap) -> Vec<ScoredSentence> {
    let mut seen = HashSet::new();
    let mut ranked: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| seen.insert(s.as_str()))
        .map(|(index, s)| ScoredSentence {
            index,
            score: score_sentence(s, freq),
        })
        .collect();
    // Stable sort, so ties stay in index order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_lowercased_tokens() {
        let freq = build_word_freq("Rust rust RUST borrow");
        assert_eq!(freq.get("rust"), Some(&3));
        assert_eq!(freq.get("borrow"), Some(&1));
        assert_eq!(freq.len(), 2);
    }

    #[test]
    fn only_stopwords_gives_empty_map() {
        assert!(build_word_freq("The and of it IS was, the.").is_empty());
        assert!(build_word_freq("").is_empty());
    }

    #[test]
    fn map_never_contains_stopwords() {
        let freq = build_word_freq("This is the protocol that the server will use over TCP.");
        assert!(freq.keys().all(|k| !is_stopword(k)));
        assert!(freq.contains_key("protocol"));
        assert!(freq.contains_key("tcp"));
    }

    #[test]
    fn repeated_builds_are_identical() {
        let text = "Alpha beta. Beta gamma! Gamma gamma delta?";
        assert_eq!(build_word_freq(text), build_word_freq(text));
    }

    #[test]
    fn sentence_score_sums_frequencies() {
        let freq = build_word_freq("cache cache miss. cache hit.");
        // cache=3, miss=1, hit=1
        assert_eq!(score_sentence("Cache miss.", &freq), 4);
        assert_eq!(score_sentence("The of and.", &freq), 0);
    }

    #[test]
    fn ranking_breaks_ties_by_position() {
        let sentences: Vec<String> = ["y one.", "x two.", "x x three."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let freq = build_word_freq("x y");
        let ranked = rank_sentences(&sentences, &freq);
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn repeated_sentences_rank_once() {
        let sentences: Vec<String> = ["x x.", "y.", "x x.", "x x."]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let freq = build_word_freq("x y");
        let order: Vec<usize> = rank_sentences(&sentences, &freq)
            .iter()
            .map(|s| s.index)
            .collect();
        assert_eq!(order, vec![0, 1]);
    }
}
