//! Library Desk - command-line front end
//!
//! Runs one desk action per invocation, or a whole session read from stdin.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_desk::{Action, AppConfig, Desk, Outcome, TerminalView};

#[derive(Parser)]
#[command(name = "library-desk", version, about = "Front desk client for the library service")]
struct Cli {
    /// Service base URL, overriding configuration
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one action, e.g. `run add-book bookName=Dune bookAuthor="Frank Herbert"`
    Run {
        action: Action,
        /// Field assignments as `fieldId=value`
        fields: Vec<String>,
    },
    /// Read `action fieldId=value ...` lines from stdin as one session
    Shell,
    /// List available actions
    Actions,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.server.base_url = base_url;
    }

    init_tracing(&config);
    tracing::debug!("Library Desk v{} against {}", env!("CARGO_PKG_VERSION"), config.server.base_url);

    match cli.command {
        Command::Actions => {
            for action in Action::ALL {
                println!("{}", action);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { action, fields } => {
            let mut view = TerminalView::new();
            view.apply_assignments(fields.iter().map(String::as_str))
                .map_err(anyhow::Error::msg)?;

            let mut desk = Desk::from_config(&config, view)?;
            let outcome = desk.perform(action).await;
            Ok(exit_code(outcome))
        }
        Command::Shell => {
            let mut desk = Desk::from_config(&config, TerminalView::new())?;
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            let mut last = Outcome::Completed;

            while let Some(line) = lines.next_line().await? {
                let words = split_line(&line);
                let Some((name, assignments)) = words.split_first() else {
                    continue;
                };
                if name == "quit" || name == "exit" {
                    break;
                }

                let action = match name.parse::<Action>() {
                    Ok(action) => action,
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                };
                if let Err(e) = desk
                    .view_mut()
                    .apply_assignments(assignments.iter().map(String::as_str))
                {
                    eprintln!("{}", e);
                    continue;
                }

                last = desk.perform(action).await;
            }

            Ok(exit_code(last))
        }
    }
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("library_desk={}", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn exit_code(outcome: Outcome) -> ExitCode {
    match outcome {
        Outcome::Completed | Outcome::NoResults => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Split a shell line on whitespace, keeping double-quoted runs together
fn split_line(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut started = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                started = true;
            }
            c if c.is_whitespace() && !quoted => {
                if started {
                    words.push(std::mem::take(&mut current));
                    started = false;
                }
            }
            c => {
                current.push(c);
                started = true;
            }
        }
    }
    if started {
        words.push(current);
    }
    words
}
