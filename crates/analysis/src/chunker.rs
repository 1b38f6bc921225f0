//! Fixed-size word windows used as the unit of retrieval.

pub const DEFAULT_CHUNK_WORDS: usize = 180;

/// Split `text` on whitespace into consecutive, non-overlapping groups of
/// `size` words, each rejoined with single spaces. The last chunk may be
/// shorter. A `size` of 0 is treated as 1.
pub fn prepare_chunks(text: &str, size: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    words.chunks(size.max(1)).map(|c| c.join(" ")).collect()
}
