use anyhow::Result;
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use pdfchat_chat::DocumentStatus;
use pdfchat_core::{ChatMessage, Role};
use std::io::{self, Write};

/// Color scheme for terminal output.
struct Colors;

impl Colors {
    const USER_PROMPT: Color = Color::Green;
    const ASSISTANT_TEXT: Color = Color::Cyan;
    const ERROR: Color = Color::Red;
    const DIM: Color = Color::DarkGrey;
    const HEADER: Color = Color::Magenta;
}

/// Manages terminal I/O for the interactive REPL.
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Print the startup banner.
    pub fn print_banner(&self) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print("pdfchat"),
            ResetColor,
            Print(" - Smart PDF Chat\n"),
            SetForegroundColor(Colors::DIM),
            Print("Load a document with /upload <path>. /help lists commands. Type 'exit' to quit.\n"),
            Print("---\n"),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Read a line of user input with prompt.
    /// Returns None at end of input.
    pub fn read_input(&self) -> Result<Option<String>> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            Print("\n"),
            SetForegroundColor(Colors::USER_PROMPT),
            Print("you> "),
            ResetColor,
        )?;
        stdout.flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }

    /// Print an assistant message.
    pub fn print_assistant(&self, text: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ASSISTANT_TEXT),
            Print(format!("{}\n", text)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print the full chat history, oldest first.
    pub fn print_history(&self, messages: &[ChatMessage]) -> Result<()> {
        let mut stdout = io::stdout();
        for msg in messages {
            let (label, color) = match msg.role {
                Role::User => ("you", Colors::USER_PROMPT),
                Role::Assistant => ("pdfchat", Colors::ASSISTANT_TEXT),
            };
            execute!(
                stdout,
                SetForegroundColor(Colors::DIM),
                Print(format!("[{}] ", msg.timestamp.format("%H:%M:%S"))),
                SetForegroundColor(color),
                Print(format!("{}> ", label)),
                ResetColor,
                Print(format!("{}\n", msg.content)),
            )?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print the command list and example questions.
    pub fn print_help(&self, examples: &[&str]) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::HEADER),
            Print("Commands:\n"),
            ResetColor,
            Print("  /upload <path>   load a PDF (replaces the current one)\n"),
            Print("  /history         show the conversation\n"),
            Print("  /status          show the loaded document\n"),
            Print("  /reset           start over\n"),
            Print("  exit | quit      leave\n"),
            SetForegroundColor(Colors::HEADER),
            Print("Try asking:\n"),
            ResetColor,
        )?;
        for example in examples {
            execute!(stdout, Print(format!("  - {}\n", example)))?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Print what is currently loaded.
    pub fn print_status(&self, status: &DocumentStatus) -> Result<()> {
        let line = match &status.pdf_name {
            Some(name) if status.loaded => format!(
                "{} ({}): {} words in {} chunks",
                status.title, name, status.word_count, status.chunk_count
            ),
            Some(name) => format!("{}: no readable text", name),
            None => "No document loaded.".to_string(),
        };
        self.print_info(&line)
    }

    /// Print an error message.
    pub fn print_error(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::ERROR),
            Print(format!("Error: {}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }

    /// Print an info message.
    pub fn print_info(&self, msg: &str) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(
            stdout,
            SetForegroundColor(Colors::DIM),
            Print(format!("{}\n", msg)),
            ResetColor,
        )?;
        stdout.flush()?;
        Ok(())
    }
}
