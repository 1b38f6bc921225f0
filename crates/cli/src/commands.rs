use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Example prompts shown by `/help`.
pub const EXAMPLE_QUERIES: &[&str] = &[
    "summarize this pdf",
    "give me important questions",
    "explain deadlock",
    "what is TCP?",
];

/// One line of REPL input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Upload(PathBuf),
    History,
    Help,
    Status,
    Reset,
    Exit,
    Ask(String),
    Empty,
}

impl Command {
    /// Lines starting with `/` are commands; anything else is a chat message.
    pub fn parse(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(Command::Empty);
        }
        if matches!(trimmed, "exit" | "quit") {
            return Ok(Command::Exit);
        }
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Ok(Command::Ask(trimmed.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };
        match name {
            "upload" => {
                if arg.is_empty() {
                    bail!("usage: /upload <path-to-pdf>");
                }
                Ok(Command::Upload(PathBuf::from(arg)))
            }
            "history" => Ok(Command::History),
            "help" => Ok(Command::Help),
            "status" => Ok(Command::Status),
            "reset" => Ok(Command::Reset),
            "exit" | "quit" => Ok(Command::Exit),
            other => bail!("unknown command '/{other}' (try /help)"),
        }
    }
}

/// Read a PDF from disk, returning its file name and bytes.
///
/// The file handle is closed before this returns.
pub fn read_pdf(path: &Path) -> Result<(String, Vec<u8>)> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_text_is_a_question() {
        assert_eq!(
            Command::parse("  what is TCP?  ").unwrap(),
            Command::Ask("what is TCP?".to_string())
        );
    }

    #[test]
    fn slash_commands() {
        assert_eq!(Command::parse("/history").unwrap(), Command::History);
        assert_eq!(Command::parse("/help").unwrap(), Command::Help);
        assert_eq!(Command::parse("/status").unwrap(), Command::Status);
        assert_eq!(Command::parse("/reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("quit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("/exit").unwrap(), Command::Exit);
        assert_eq!(Command::parse("").unwrap(), Command::Empty);
    }

    #[test]
    fn upload_keeps_path_with_spaces() {
        assert_eq!(
            Command::parse("/upload  my docs/week 1.pdf").unwrap(),
            Command::Upload(PathBuf::from("my docs/week 1.pdf"))
        );
    }

    #[test]
    fn incomplete_or_unknown_commands_are_errors() {
        assert!(Command::parse("/upload").is_err());
        assert!(Command::parse("/frobnicate").is_err());
        assert!(Command::parse("/open notes.pdf").is_err());
    }

    #[test]
    fn read_pdf_returns_name_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lecture.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 stub").unwrap();
        drop(file);

        let (name, bytes) = read_pdf(&path).unwrap();
        assert_eq!(name, "lecture.pdf");
        assert_eq!(bytes, b"%PDF-1.4 stub");
    }

    #[test]
    fn read_pdf_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_pdf(&dir.path().join("nope.pdf")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
