use std::path::PathBuf;

use clap::Parser;
use pdfchat_core::AnalysisConfig;

/// Chat with a PDF from the terminal.
///
/// Upload a document, then ask for a summary, important questions, or
/// anything else; answers are quoted from the best matching passage.
#[derive(Parser, Debug)]
#[command(name = "pdfchat", version, about = "Chat with a PDF from the terminal")]
pub struct CliArgs {
    /// PDF to load before the first prompt
    #[arg(long)]
    pub pdf: Option<PathBuf>,

    /// Configuration profile (env keys are looked up as {PROFILE}_{KEY} first)
    #[arg(long, env = "PDFCHAT_PROFILE")]
    pub profile: Option<String>,

    /// Sentences kept in a summary
    #[arg(long)]
    pub summary_sentences: Option<usize>,

    /// Words per retrieval chunk
    #[arg(long)]
    pub chunk_words: Option<usize>,

    /// Question/answer pairs per request
    #[arg(long)]
    pub qa_pairs: Option<usize>,
}

impl CliArgs {
    /// Flags win over environment settings.
    pub fn apply_overrides(&self, analysis: &mut AnalysisConfig) {
        if let Some(n) = self.summary_sentences {
            analysis.summary_sentences = n;
        }
        if let Some(n) = self.chunk_words {
            analysis.chunk_words = n;
        }
        if let Some(n) = self.qa_pairs {
            analysis.qa_pairs = n;
        }
    }
}
