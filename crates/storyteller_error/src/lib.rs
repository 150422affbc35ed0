//! Error types for the Storyteller workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The pipeline's failure taxonomy lives in [`GenerationErrorKind`]. Every
//! other error type converts into the top-level [`StorytellerError`].
//!
//! # Examples
//!
//! ```
//! use storyteller_error::{ConfigError, StorytellerResult};
//!
//! fn load() -> StorytellerResult<String> {
//!     Err(ConfigError::new("model.name is empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod generation;
mod json;
mod session;
mod storage;

pub use config::ConfigError;
pub use error::{StorytellerError, StorytellerErrorKind, StorytellerResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, GenerationResult};
pub use json::JsonError;
pub use session::{SessionError, SessionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
