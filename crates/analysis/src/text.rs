//! Whitespace normalization, sentence splitting and word tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Accepts `&str` or `Option<&str>`; `None` and blank input yield `""`.
pub fn normalize<'a>(text: impl Into<Option<&'a str>>) -> String {
    match text.into() {
        Some(t) => t.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

/// Split `text` immediately after `.`, `!` or `?` when the punctuation is
/// followed by whitespace. Returns trimmed, non-empty sentences in order.
///
/// Text without terminal punctuation comes back as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let Some(&(boundary, next)) = chars.peek() else {
            break;
        };
        if !next.is_whitespace() {
            continue;
        }
        push_trimmed(&mut sentences, &text[start..boundary]);
        while chars.peek().is_some_and(|&(_, w)| w.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(i, _)| i);
    }

    push_trimmed(&mut sentences, &text[start..]);
    sentences
}

fn push_trimmed(out: &mut Vec<String>, fragment: &str) {
    let s = fragment.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

/// Maximal runs of word characters (letters, digits, underscore), case preserved.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}
