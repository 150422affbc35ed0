//! Mock structured driver for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use storyteller_core::{Credential, StructuredRequest, StructuredResponse};
use storyteller_error::{GenerationError, GenerationErrorKind, GenerationResult};
use storyteller_interface::StructuredDriver;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return the given text body
    Text(String),
    /// Always answer without a text body
    Empty,
    /// Always fail with the given error
    Error(GenerationErrorKind),
    /// Return responses in order; calls past the end fail
    Sequence(Vec<MockResponse>),
}

/// A single mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    Empty,
    Error(GenerationErrorKind),
}

/// Driver that answers from a script and records what it was asked.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<StructuredRequest>>>,
    credentials: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockDriver {
    /// Always succeed with `text`.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Text(text.into()))
    }

    /// Always succeed with `value` serialized as JSON.
    pub fn new_json<T: serde::Serialize>(value: &T) -> Self {
        Self::new_text(serde_json::to_string(value).unwrap())
    }

    /// Always answer with no text.
    pub fn new_empty() -> Self {
        Self::new_with_behavior(MockBehavior::Empty)
    }

    /// Always fail with `kind`.
    pub fn new_error(kind: GenerationErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(kind))
    }

    /// Fail with an HTTP-level transport failure.
    pub fn new_http_error(status_code: u16, message: &str) -> Self {
        Self::new_error(GenerationErrorKind::TransportFailure {
            status_code: Some(status_code),
            message: message.to_string(),
        })
    }

    /// Answer from `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            credentials: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of provider calls made.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, oldest first.
    pub fn requests(&self) -> Vec<StructuredRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Raw credential values received, oldest first.
    pub fn credentials_seen(&self) -> Vec<String> {
        self.credentials.lock().unwrap().clone()
    }

    fn next_response(&self, index: usize) -> MockResponse {
        match &self.behavior {
            MockBehavior::Text(text) => MockResponse::Text(text.clone()),
            MockBehavior::Empty => MockResponse::Empty,
            MockBehavior::Error(kind) => MockResponse::Error(kind.clone()),
            MockBehavior::Sequence(responses) => responses.get(index).cloned().unwrap_or(
                MockResponse::Error(GenerationErrorKind::TransportFailure {
                    status_code: None,
                    message: "mock sequence exhausted".to_string(),
                }),
            ),
        }
    }
}

#[async_trait]
impl StructuredDriver for MockDriver {
    async fn generate_structured(
        &self,
        credential: &Credential,
        request: &StructuredRequest,
    ) -> GenerationResult<StructuredResponse> {
        let index = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };
        self.credentials
            .lock()
            .unwrap()
            .push(credential.expose().to_string());

        match self.next_response(index) {
            MockResponse::Text(text) => Ok(StructuredResponse::text_body(text)),
            MockResponse::Empty => Ok(StructuredResponse::default()),
            MockResponse::Error(kind) => Err(GenerationError::new(kind)),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}
