mod cli;
mod commands;

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use scrub_config::{Config, LoggingConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    init_tracing(&config.logging)?;

    match cli.command {
        cli::Commands::Sanitize {
            input,
            roster,
            output,
            placeholder,
            whole_word,
            append,
        } => commands::sanitize::handle(
            &config,
            &input,
            &roster,
            &output,
            placeholder,
            whole_word,
            append,
        ),
        cli::Commands::Text {
            roster,
            text,
            placeholder,
            whole_word,
        } => commands::text::handle(&config, &roster, &text, placeholder, whole_word),
        cli::Commands::Inspect { file, json } => commands::inspect::handle(&file, json),
        cli::Commands::Extract {
            input,
            folder,
            format,
            output,
        } => commands::extract::handle(&input, folder.as_deref(), format, output.as_deref()),
    }
}

/// RUST_LOG wins over the configured level. Logs go to stderr, or to the
/// configured file without colours.
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    match &logging.file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}
