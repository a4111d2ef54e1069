//! FilesTree browser.
//!
//! Loads configuration, connects the entry store to the configured row
//! remote through a sync controller, and reads browser commands from stdin.

use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing_subscriber::{EnvFilter, fmt};

use filestree_core::config::AppConfig;
use filestree_core::error::AppError;
use filestree_core::events::{EventPayload, SyncEvent};
use filestree_service::{EntryStore, StartOutcome, SyncController};

mod commands;
mod output;

use commands::{Browser, Flow};
use output::OutputFormat;

/// FilesTree: browse and edit a synced entry tree
#[derive(Debug, Parser)]
#[command(name = "filestree", version, about, long_about = None)]
struct Cli {
    /// Directory holding `default` and per-environment config files
    #[arg(short, long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to load from the config directory
    #[arg(short, long, default_value = "development")]
    env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load_from(&cli.config_dir, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config, cli.format).await {
        tracing::error!("Browser error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr; stdout belongs to the browser.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

async fn run(config: AppConfig, format: OutputFormat) -> Result<(), AppError> {
    tracing::info!("Starting FilesTree v{}", env!("CARGO_PKG_VERSION"));

    let remote = filestree_storage::build_remote(&config.remote).await?;
    let sync = SyncController::spawn(EntryStore::new(&config.store), remote, &config.sync);

    let _listener = sync.on_state_change(|event| {
        if let Some(warning) = background_warning(&event.payload) {
            output::print_warning(&warning);
        }
    });

    match sync.start().await {
        Ok(StartOutcome::Fetched { count }) => {
            output::print_success(&format!("Loaded {count} entries"));
        }
        Ok(StartOutcome::AlreadyLoaded { count }) => {
            output::print_success(&format!("{count} entries already loaded"));
        }
        Err(e) => output::print_error(&format!("{e}. Use `reload` to retry.")),
    }

    let mut browser = Browser::new(sync, format);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{}", browser.prompt());
        std::io::stdout().flush()?;

        let Some(line) = next_input(&mut lines).await? else {
            break;
        };
        if browser.execute_line(&line).await == Flow::Quit {
            break;
        }
    }

    tracing::info!("FilesTree browser stopped");
    Ok(())
}

/// Warning for a state change nobody asked for.
///
/// Fetch failures are left out: `start` and `reload` return them to the
/// caller, which reports them.
fn background_warning(payload: &EventPayload) -> Option<String> {
    match payload {
        EventPayload::Sync(SyncEvent::PushFailed { message }) => {
            Some(format!("Changes kept locally, push failed: {message}"))
        }
        _ => None,
    }
}

/// Next input line, or `None` at end of input.
///
/// A line that is not valid UTF-8 is reported and skipped; other read
/// errors end the session.
async fn next_input<R>(lines: &mut Lines<R>) -> Result<Option<String>, AppError>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        match lines.next_line().await {
            Ok(line) => return Ok(line),
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                output::print_error(&format!("Skipping unreadable input line: {e}"));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"mkdir\n\xff\xfe\nls\n";
        let mut lines = BufReader::new(input).lines();

        assert_eq!(next_input(&mut lines).await.unwrap().as_deref(), Some("mkdir"));
        assert_eq!(next_input(&mut lines).await.unwrap().as_deref(), Some("ls"));
        assert_eq!(next_input(&mut lines).await.unwrap(), None);
    }

    #[test]
    fn test_fetch_failure_is_left_to_the_caller() {
        let fetch = EventPayload::Sync(SyncEvent::FetchFailed {
            message: "offline".to_string(),
        });
        let push = EventPayload::Sync(SyncEvent::PushFailed {
            message: "offline".to_string(),
        });

        assert_eq!(background_warning(&fetch), None);
        assert!(background_warning(&push).unwrap().contains("offline"));
    }
}
