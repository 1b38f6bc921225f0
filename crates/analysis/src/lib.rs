//! Heuristic text analysis over a single document.
//!
//! Everything here is a pure, in-memory transformation over already-loaded
//! text: whitespace normalization, sentence splitting, word-frequency scoring,
//! extractive summarization, fixed-size chunking, term-overlap retrieval and
//! keyword-based question generation.

pub mod chunker;
pub mod frequency;
pub mod qa;
pub mod retrieve;
pub mod stopwords;
pub mod summarize;
pub mod text;

pub use chunker::{prepare_chunks, DEFAULT_CHUNK_WORDS};
pub use frequency::{build_word_freq, rank_sentences, score_sentence, FrequencyMap, ScoredSentence};
pub use qa::{format_qa, generate_qa, QaPair, DEFAULT_QA_PAIRS};
pub use retrieve::{answer, answer_with, best_chunk, RetrievalHit};
pub use stopwords::is_stopword;
pub use summarize::{summarize, DEFAULT_SUMMARY_SENTENCES};
pub use text::{normalize, split_sentences, words};
