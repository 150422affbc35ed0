//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the storyteller binary.

mod commands;
mod key;
mod render;
mod run;

pub use commands::{Cli, Commands, ExportFormat, KeyCommands, OutputFormat};
pub use key::{handle_key_command, seed_session_key};
pub use run::{build_pipeline, load_config, run_analyze, run_studio, run_topics};
