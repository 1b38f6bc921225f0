use serde::Serialize;

/// What a user query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Summarize,
    GenerateQuestions,
    Answer,
}

const SUMMARY_KEYWORDS: &[&str] = &["summary", "summarize"];
const QUESTION_KEYWORDS: &[&str] = &["important question", "generate question"];

/// Keyword routing on the lowercased query. First match wins:
/// summary keywords, then question keywords, otherwise an answer lookup.
pub fn classify(query: &str) -> Intent {
    let q = query.to_lowercase();
    if SUMMARY_KEYWORDS.iter().any(|k| q.contains(k)) {
        Intent::Summarize
    } else if QUESTION_KEYWORDS.iter().any(|k| q.contains(k)) {
        Intent::GenerateQuestions
    } else {
        Intent::Answer
    }
}
