//! Three-stage script generation pipeline.
//!
//! Trend analysis feeds the dashboard, topic recommendation offers four
//! story ideas, and script generation turns one of them into a long-form
//! radio-drama script. Every stage shares one persona directive and sends a
//! response schema the provider must satisfy.
//!
//! [`ScriptPipeline`] exposes the stages as independent calls;
//! [`StudioSession`] walks them in order and keeps per-step state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod fallback;
mod parse;
mod pipeline;
mod prompts;
mod schema;
mod session;
mod stage;

pub use config::{ModelConfig, StorageConfig, StorytellerConfig};
pub use fallback::fallback_analysis;
pub use parse::parse_structured;
pub use pipeline::{AnalysisOutcome, ScriptPipeline};
pub use prompts::{
    MIN_SCRIPT_CHARS, PERSONA_DIRECTIVE, TOPIC_RECOMMENDATION_PROMPT, TREND_ANALYSIS_PROMPT,
    script_prompt,
};
pub use schema::{analysis_schema, script_schema, topics_schema};
pub use session::{
    ANALYSIS_FAILED_MESSAGE, SCRIPT_FAILED_MESSAGE, Step, StudioSession, TOPICS_FAILED_MESSAGE,
};
pub use stage::Stage;
