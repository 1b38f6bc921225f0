use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{PdfChatError, Result};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

fn profiled_env_u16(profile: &str, key: &str, default: u16) -> u16 {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn profiled_env_usize(profile: &str, key: &str, default: usize) -> usize {
    profiled_env_opt(profile, key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub analysis: AnalysisConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `PDFCHAT_PROFILE` env var. When set (e.g. `DEMO`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("PDFCHAT_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            analysis: AnalysisConfig::from_env_profiled(p),
            server: ServerConfig::from_env_profiled(p),
        }
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Reject settings the hosts cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.analysis.summary_sentences == 0 {
            return Err(PdfChatError::InvalidConfig(
                "SUMMARY_SENTENCES must be at least 1".to_string(),
            ));
        }
        if self.analysis.chunk_words == 0 {
            return Err(PdfChatError::InvalidConfig(
                "CHUNK_WORDS must be at least 1".to_string(),
            ));
        }
        if self.server.max_upload_mb == 0 {
            return Err(PdfChatError::InvalidConfig(
                "MAX_UPLOAD_MB must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!(
            "  analysis:    summary_sentences={}, chunk_words={}, qa_pairs={}",
            self.analysis.summary_sentences,
            self.analysis.chunk_words,
            self.analysis.qa_pairs
        );
        tracing::info!(
            "  server:      {}:{}, max_upload_mb={}",
            self.server.host,
            self.server.port,
            self.server.max_upload_mb
        );
    }

    /// Return a view safe for API responses.
    pub fn redacted_summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "analysis": {
                "summary_sentences": self.analysis.summary_sentences,
                "chunk_words": self.analysis.chunk_words,
                "qa_pairs": self.analysis.qa_pairs,
            },
            "server": {
                "host": self.server.host,
                "port": self.server.port,
                "max_upload_mb": self.server.max_upload_mb,
            },
        })
    }
}

// ── Analysis ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sentences kept by the extractive summary.
    pub summary_sentences: usize,
    /// Words per retrieval chunk.
    pub chunk_words: usize,
    /// Question/answer pairs generated per request.
    pub qa_pairs: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            summary_sentences: 7,
            chunk_words: 180,
            qa_pairs: 5,
        }
    }
}

impl AnalysisConfig {
    fn from_env_profiled(p: &str) -> Self {
        let defaults = Self::default();
        Self {
            summary_sentences: profiled_env_usize(
                p,
                "SUMMARY_SENTENCES",
                defaults.summary_sentences,
            ),
            chunk_words: profiled_env_usize(p, "CHUNK_WORDS", defaults.chunk_words),
            qa_pairs: profiled_env_usize(p, "QA_PAIRS", defaults.qa_pairs),
        }
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub max_upload_mb: usize,
}

impl ServerConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            host: profiled_env_or(p, "HOST", "0.0.0.0"),
            port: profiled_env_u16(p, "PORT", 3001),
            cors_origin: profiled_env_or(p, "CORS_ORIGIN", "*"),
            max_upload_mb: profiled_env_usize(p, "MAX_UPLOAD_MB", 50),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}
