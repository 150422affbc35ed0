//! The three pipeline stages.

use serde_json::Value;
use storyteller_core::StructuredRequest;

use crate::{PERSONA_DIRECTIVE, analysis_schema, script_schema, topics_schema};

/// One of the three sequential generation calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    /// Trend analysis
    Analysis,
    /// Topic recommendation
    Recommendation,
    /// Full script generation
    Generation,
}

impl Stage {
    /// Response schema the provider must satisfy for this stage.
    pub fn schema(self) -> Value {
        match self {
            Stage::Analysis => analysis_schema(),
            Stage::Recommendation => topics_schema(),
            Stage::Generation => script_schema(),
        }
    }

    /// Build the request for this stage: persona, `prompt` and schema for `model`.
    pub fn request(self, model: &str, prompt: impl Into<String>) -> StructuredRequest {
        StructuredRequest::new(model, prompt, PERSONA_DIRECTIVE, self.schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_stage_carries_persona() {
        for stage in Stage::iter() {
            let request = stage.request("gemini-2.0-flash-exp", "prompt");
            assert_eq!(request.system_instruction(), PERSONA_DIRECTIVE);
            assert_eq!(request.model(), "gemini-2.0-flash-exp");
            assert_eq!(request.response_schema(), &stage.schema());
        }
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Recommendation.to_string(), "recommendation");
    }
}
