//! Storyteller CLI binary.
//!
//! This binary provides command-line access to Storyteller's pipeline:
//! - Store or inspect the Gemini API key
//! - Run the trend analysis or topic recommendation on its own
//! - Walk the full pipeline and export the generated script

use clap::Parser;
use storyteller::{ObservabilityConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, build_pipeline, handle_key_command, load_config, run_analyze, run_studio,
        run_topics, seed_session_key,
    };

    // .env may supply GEMINI_API_KEY before arguments are parsed
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::new(env!("CARGO_PKG_NAME"))
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = load_config(cli.config.as_deref())?;
    let pipeline = build_pipeline(&config)?;

    if let Some(raw) = cli.api_key.as_deref() {
        seed_session_key(pipeline.credentials(), raw)?;
    }

    match cli.command {
        Commands::Key(key_cmd) => {
            handle_key_command(key_cmd, pipeline.credentials())?;
        }

        Commands::Analyze { format } => {
            run_analyze(&pipeline, format).await?;
        }

        Commands::Topics { format } => {
            run_topics(&pipeline, format).await?;
        }

        Commands::Run { topic, out, format } => {
            run_studio(pipeline, topic, out, format).await?;
        }
    }

    Ok(())
}
