//! Command line argument parsing for the Topica CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Topica - topic phrase extraction and frequency ranking
#[derive(Parser, Debug, Clone)]
#[command(name = "topica")]
#[command(about = "Extract and rank topic phrases from web pages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TopicaArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TopicaArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch a page and rank its topic phrases
    Extract(ExtractArgs),

    /// Rank topic phrases from a JSON document file
    Rank(RankArgs),
}

/// Arguments for extracting from a live page
#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    /// URL of the page to fetch
    #[arg(value_name = "URL")]
    pub url: String,

    /// Harvest all visible body text instead of link texts only
    #[arg(long)]
    pub all_text: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "3")]
    pub timeout: u64,

    /// Custom chunk grammar pattern
    #[arg(short, long)]
    pub grammar: Option<String>,

    /// Maximum number of ranked phrases to show (0 = all)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,
}

/// Arguments for ranking a document file
#[derive(Parser, Debug, Clone)]
pub struct RankArgs {
    /// Path to a JSON document with "title" and "content" keys
    #[arg(value_name = "DOCUMENT_FILE")]
    pub document_file: PathBuf,

    /// Custom chunk grammar pattern
    #[arg(short, long)]
    pub grammar: Option<String>,

    /// Maximum number of ranked phrases to show (0 = all)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
