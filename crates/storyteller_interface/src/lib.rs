//! Trait definitions for the Storyteller pipeline.
//!
//! The pipeline only ever talks to the remote model through
//! [`StructuredDriver`], so tests can substitute a scripted driver.

mod traits;

pub use traits::StructuredDriver;
