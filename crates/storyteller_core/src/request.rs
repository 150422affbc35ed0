//! Request and response types for schema-constrained generation.

use serde::{Deserialize, Serialize};

/// One schema-constrained generation call.
///
/// # Examples
///
/// ```
/// use storyteller_core::StructuredRequest;
/// use serde_json::json;
///
/// let request = StructuredRequest::builder()
///     .model("gemini-2.0-flash-exp")
///     .prompt("추천해주세요")
///     .system_instruction("당신은 방송 작가입니다")
///     .response_schema(json!({"type": "ARRAY"}))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.model(), "gemini-2.0-flash-exp");
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct StructuredRequest {
    /// Model identifier
    model: String,
    /// Task prompt
    prompt: String,
    /// Persona directive
    system_instruction: String,
    /// Output schema the provider must satisfy
    response_schema: serde_json::Value,
}

impl StructuredRequest {
    /// Create a request from its parts.
    pub fn new(
        model: impl Into<String>,
        prompt: impl Into<String>,
        system_instruction: impl Into<String>,
        response_schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            system_instruction: system_instruction.into(),
            response_schema,
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> StructuredRequestBuilder {
        StructuredRequestBuilder::default()
    }
}

/// What the provider sent back, before any parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters)]
pub struct StructuredResponse {
    /// Text body, expected to be JSON matching the requested schema
    text: Option<String>,
    /// Provider finish reason, if reported
    finish_reason: Option<String>,
}

impl StructuredResponse {
    /// Create a response from its parts.
    pub fn new(text: Option<String>, finish_reason: Option<String>) -> Self {
        Self {
            text,
            finish_reason,
        }
    }

    /// A response carrying a text body.
    pub fn text_body(text: impl Into<String>) -> Self {
        Self::new(Some(text.into()), Some("STOP".to_string()))
    }

    /// Consume the response, keeping only the text body.
    pub fn into_text(self) -> Option<String> {
        self.text
    }
}
