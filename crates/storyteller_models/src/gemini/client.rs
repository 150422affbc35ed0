//! Google Gemini REST client.
//!
//! Each call is a single `POST {base}/models/{model}:generateContent` carrying
//! the persona directive as `systemInstruction`, the task prompt as one user
//! turn, and a `generationConfig` that pins the output to JSON matching the
//! supplied schema.
//!
//! # Example
//!
//! ```no_run
//! use storyteller_models::GeminiClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Point at a proxy or mock server instead of Google
//! let client = GeminiClient::with_base_url("http://localhost:8080/v1beta")?;
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, instrument, warn};

use storyteller_core::{Credential, StructuredRequest, StructuredResponse};
use storyteller_error::{GeminiError, GeminiErrorKind, GenerationResult};
use storyteller_interface::StructuredDriver;

use super::GeminiResult;
use super::wire::{
    Content, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};

/// Public Gemini REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";
const JSON_MIME_TYPE: &str = "application/json";

/// Client for Google's Gemini API.
///
/// Holds no credential; the caller passes one per request so that a key
/// entered mid-session is picked up by the next call.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for the public Gemini endpoint.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built (TLS backend failure).
    #[instrument(name = "gemini_client_new")]
    pub fn new() -> GeminiResult<Self> {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Create a client for a custom base URL (e.g. `http://host/v1beta`).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> GeminiResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(%base_url, "Created Gemini client");
        Ok(Self { http, base_url })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:generateContent", self.base_url, model_path(model))
    }

    #[instrument(
        skip(self, credential, request),
        fields(
            model = %request.model(),
            prompt_len = request.prompt().len(),
        )
    )]
    async fn generate_internal(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> GeminiResult<StructuredResponse> {
        let body = GenerateContentRequest {
            contents: vec![Content::user(request.prompt())],
            system_instruction: Content::system(request.system_instruction()),
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: request.response_schema(),
            },
        };

        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint(request.model()))
            .header(API_KEY_HEADER, credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !status.is_success() {
            let message = error_message(&raw);
            warn!(status = status.as_u16(), %message, "Gemini API returned error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            }));
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&raw)
            .map_err(|e| GeminiError::new(GeminiErrorKind::InvalidEnvelope(e.to_string())))?;

        if let Some(reason) = envelope.block_reason() {
            warn!(block_reason = reason, "Prompt was blocked");
        }

        let text = envelope.first_text();
        let finish_reason = envelope.finish_reason();
        debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            text_len = text.as_ref().map(String::len).unwrap_or(0),
            finish_reason = ?finish_reason,
            "Gemini call complete"
        );

        Ok(StructuredResponse::new(text, finish_reason))
    }
}

#[async_trait]
impl StructuredDriver for GeminiClient {
    async fn generate_structured(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> GenerationResult<StructuredResponse> {
        self.generate_internal(credential, request)
            .await
            .map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

/// Accepts both `gemini-2.0-flash` and `models/gemini-2.0-flash`.
fn model_path(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

/// Provider message from an error envelope, or the raw body when it isn't one.
fn error_message(raw: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) => match envelope.error.status {
            Some(status) if !envelope.error.message.contains(&status) => {
                format!("{} ({})", envelope.error.message, status)
            }
            _ => envelope.error.message,
        },
        Err(_) => raw.trim().to_string(),
    }
}
