//! Core data types for the Storyteller pipeline.
//!
//! These are the values that flow between the three stages (trend analysis,
//! topic recommendation, script generation) and the request/response shapes
//! exchanged with the provider driver.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analysis;
mod credential;
mod request;
mod script;
mod topic;

pub use analysis::AnalysisResult;
pub use credential::{Credential, StorageScope};
pub use request::{
    StructuredRequest, StructuredRequestBuilder, StructuredRequestBuilderError, StructuredResponse,
};
pub use script::GeneratedScript;
pub use topic::{ScriptTopic, TopicCategory};
