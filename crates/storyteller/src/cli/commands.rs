//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storyteller - long-form drama scripts for senior YouTube channels
#[derive(Parser, Debug)]
#[command(name = "storyteller")]
#[command(
    about = "Analyse senior storytelling trends, pick a topic and generate a full script",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Gemini API key for this invocation only (never written to disk)
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Configuration file to use instead of the standard locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the stored API key
    #[command(subcommand)]
    Key(KeyCommands),

    /// Analyse current trends on senior storytelling channels
    Analyze {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Recommend four story topics
    Topics {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Walk the full pipeline: analysis, topic choice, script
    Run {
        /// Topic number to generate (1-based); prompts when omitted
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        topic: Option<u64>,

        /// Write the script to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Script format
        #[arg(long, default_value = "text")]
        format: ExportFormat,
    },
}

/// API key subcommands
#[derive(Subcommand, Debug)]
pub enum KeyCommands {
    /// Store an API key
    Set {
        /// The Gemini API key (starts with "AIza")
        key: String,

        /// Keep the key across runs; otherwise it lasts for this invocation
        #[arg(long)]
        remember: bool,
    },

    /// Show where the active key comes from (never the key itself)
    Status,
}

/// Output format for analysis and topic listings
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Script export format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Labelled plain text
    Text,
    /// The script object as JSON
    Json,
}
