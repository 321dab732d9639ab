use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scrub_core::OutputFormat;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Redact participant names from scraped forum posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: config.toml in the platform config directory)
    #[arg(long, global = true, env = "SCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sanitize a JSONL file of posts
    Sanitize {
        /// Scraped posts (JSONL)
        #[arg(long)]
        input: PathBuf,

        /// Participant roster (JSON array or JSONL)
        #[arg(long)]
        roster: PathBuf,

        /// Where to write sanitized posts (JSONL)
        #[arg(long)]
        output: PathBuf,

        /// Replacement text (default from config: [NAME])
        #[arg(long)]
        placeholder: Option<String>,

        /// Only replace names that stand as whole words
        #[arg(long)]
        whole_word: bool,

        /// Append to the output file instead of overwriting it
        #[arg(long)]
        append: bool,
    },

    /// Sanitize a single piece of text and print it
    Text {
        /// Participant roster (JSON array or JSONL)
        #[arg(long)]
        roster: PathBuf,

        /// Text to sanitize
        text: String,

        #[arg(long)]
        placeholder: Option<String>,

        #[arg(long)]
        whole_word: bool,
    },

    /// Show metadata for a JSONL file
    Inspect {
        file: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List folders, or render the posts in one folder
    Extract {
        /// Posts (JSONL)
        #[arg(long)]
        input: PathBuf,

        /// Folder to extract; lists folders when omitted
        #[arg(long)]
        folder: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}
