//! Fixed English stopword set excluded from frequency scoring.

use std::collections::HashSet;

use once_cell::sync::Lazy;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "is", "am", "are", "was", "were", "this", "that", "these", "those", "and",
    "or", "but", "if", "in", "on", "at", "for", "with", "by", "to", "from", "of", "as", "it",
    "its", "be", "has", "have", "had", "do", "does", "did", "so", "such", "than", "then", "very",
    "can", "could", "will", "would", "should", "about", "into", "over", "under", "again", "more",
    "most", "other", "only", "same", "own",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());

/// `word` must already be lowercase.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}
