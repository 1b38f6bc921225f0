mod cli;
mod commands;
mod terminal;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pdfchat_chat::ChatSession;
use pdfchat_core::config::load_dotenv;
use pdfchat_core::Config;

use crate::cli::CliArgs;
use crate::commands::{read_pdf, Command, EXAMPLE_QUERIES};
use crate::terminal::Terminal;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    load_dotenv();
    let args = CliArgs::parse();

    let mut config = match args.profile.as_deref() {
        Some(profile) => Config::for_profile(profile),
        None => Config::from_env(),
    };
    args.apply_overrides(&mut config.analysis);
    config.validate().context("invalid configuration")?;
    config.log_summary();

    let terminal = Terminal::new();
    let mut session = ChatSession::new(config.analysis);

    terminal.print_banner()?;
    for msg in session.messages() {
        terminal.print_assistant(&msg.content)?;
    }

    if let Some(ref path) = args.pdf {
        upload(&mut session, &terminal, path)?;
    }

    // REPL loop
    loop {
        let Some(line) = terminal.read_input()? else {
            terminal.print_info("Goodbye.")?;
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                terminal.print_error(&format!("{:#}", e))?;
                continue;
            }
        };

        match command {
            Command::Empty => continue,
            Command::Exit => {
                terminal.print_info("Goodbye.")?;
                break;
            }
            Command::Upload(path) => upload(&mut session, &terminal, &path)?,
            Command::History => terminal.print_history(session.messages())?,
            Command::Help => terminal.print_help(EXAMPLE_QUERIES)?,
            Command::Status => {
                terminal.print_status(&session.status())?;
                terminal.print_info(&format!(
                    "Session {} started {}, {} messages",
                    session.id(),
                    session.created_at().format("%Y-%m-%d %H:%M:%S"),
                    session.messages().len()
                ))?;
            }
            Command::Reset => {
                session.reset();
                terminal.print_assistant(&session.messages()[0].content)?;
            }
            Command::Ask(query) => {
                let reply = session.send(&query);
                info!(intent = ?reply.intent, "answered query");
                terminal.print_assistant(&reply.text)?;
            }
        }
    }

    Ok(())
}

/// Load a PDF into the session. A file that cannot be read is reported and
/// leaves the current document in place.
fn upload(session: &mut ChatSession, terminal: &Terminal, path: &Path) -> Result<()> {
    match read_pdf(path) {
        Ok((name, bytes)) => {
            let ack = session.upload_pdf(&name, &bytes);
            terminal.print_assistant(&ack.content)
        }
        Err(e) => terminal.print_error(&format!("{:#}", e)),
    }
}
