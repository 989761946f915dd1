//! CLI argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Convert a saved ChatGPT HTML conversation to Markdown
#[derive(Parser, Debug)]
#[command(name = "chatmd")]
#[command(version)]
#[command(about = "Convert a saved ChatGPT HTML conversation to Markdown")]
pub struct Cli {
    /// HTML file saved from the conversation page
    pub input: PathBuf,

    /// Output file (default: input path with its extension replaced by .md)
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', default_value = "markdown")]
    pub format: Format,

    /// Suppress the success report
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Check if colors should be used
    pub fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        if self.color {
            return true;
        }
        atty::is(atty::Stream::Stdout)
    }
}

/// Output format for the converted document
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum Format {
    /// Role-labelled Markdown message log
    #[default]
    Markdown,
    /// One JSON object per message, one per line
    Json,
    /// Message text only, no role labels
    Minimal,
}
