//! Credential storage for Storyteller.
//!
//! Credentials live in one of two scopes: durable (survives restarts) and
//! session (cleared when the process ends). The scopes are provided by a
//! pluggable [`KeyValueStore`] backend so the pipeline can run against an
//! in-memory store in tests and a file-backed store in the CLI.
//!
//! # Example
//!
//! ```rust
//! use storyteller_storage::{CredentialStore, MemoryStore};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let credentials = CredentialStore::new(MemoryStore::new());
//! assert!(credentials.resolve().is_none());
//!
//! credentials.persist("AIzaSyExample", false)?;
//! assert_eq!(credentials.resolve().unwrap().expose(), "AIzaSyExample");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credential;
mod filesystem;
mod memory;
mod store;

pub use credential::{CredentialStore, DURABLE_KEY, SESSION_KEY};
pub use filesystem::FileSystemStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
pub use storyteller_error::{StorageError, StorageErrorKind};
