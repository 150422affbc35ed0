//! Storyteller - long-form drama scripts for senior YouTube channels
//!
//! Storyteller drives Google Gemini through three dependent calls: it
//! analyses what currently works on senior storytelling channels, recommends
//! four story topics, and writes a full radio-drama script for the chosen
//! topic. Every call runs under the caller's own API key.
//!
//! # Quick Start
//!
//! ```no_run
//! use storyteller::{FileSystemStore, GeminiClient, ScriptPipeline, StudioSession};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = FileSystemStore::new("/tmp/storyteller")?;
//!     let pipeline = ScriptPipeline::new(GeminiClient::new()?, store, "gemini-2.0-flash-exp");
//!     pipeline.persist_credential("AIza...", true)?;
//!
//!     let mut session = StudioSession::new(pipeline);
//!     session.start().await?;
//!     session.request_topics().await?;
//!     let script = session.select_topic(0).await?;
//!     println!("{}", script.to_plain_text());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `storyteller_error` - Error types
//! - `storyteller_core` - Data model shared by every stage
//! - `storyteller_interface` - `StructuredDriver` trait
//! - `storyteller_storage` - Durable and session credential scopes
//! - `storyteller_models` - Gemini REST client
//! - `storyteller_pipeline` - Prompts, schemas, stage orchestration, configuration
//!
//! This crate re-exports everything for convenience and ships the
//! `storyteller` binary.

pub use storyteller_core::*;
pub use storyteller_error::*;
pub use storyteller_interface::*;
pub use storyteller_models::*;
pub use storyteller_pipeline::*;
pub use storyteller_storage::{
    CredentialStore, DURABLE_KEY, FileSystemStore, KeyValueStore, MemoryStore, SESSION_KEY,
};

pub mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
