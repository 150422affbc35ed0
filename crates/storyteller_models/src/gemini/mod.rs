//! Google Gemini REST client.

mod client;
mod wire;

pub use client::{DEFAULT_API_BASE_URL, GeminiClient};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, storyteller_error::GeminiError>;
