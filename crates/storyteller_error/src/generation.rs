//! Stage failure taxonomy shared by all three pipeline stages.

use crate::{GeminiError, GeminiErrorKind};

/// Why a stage could not produce its structured output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// No credential resolved from either storage scope
    #[display("No API key is configured")]
    MissingCredential,
    /// Network or provider-level failure
    #[display("Transport failure: {}", message)]
    TransportFailure {
        /// HTTP status code, if the provider responded
        status_code: Option<u16>,
        /// Provider or network message
        message: String,
    },
    /// Provider answered without any text body
    #[display("Provider returned an empty response")]
    EmptyResponse,
    /// Text body did not parse into the requested shape
    #[display("Malformed response: {}", _0)]
    MalformedResponse(String),
}

impl GenerationErrorKind {
    /// Whether the caller should re-prompt for a credential.
    ///
    /// Gemini reports a rejected key as 400 `INVALID_ARGUMENT` with an
    /// "API key not valid" message rather than 401.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyteller_error::GenerationErrorKind;
    ///
    /// assert!(GenerationErrorKind::MissingCredential.is_auth_failure());
    /// assert!(GenerationErrorKind::TransportFailure {
    ///     status_code: Some(403),
    ///     message: "PERMISSION_DENIED".to_string(),
    /// }
    /// .is_auth_failure());
    /// assert!(!GenerationErrorKind::EmptyResponse.is_auth_failure());
    /// ```
    pub fn is_auth_failure(&self) -> bool {
        match self {
            GenerationErrorKind::MissingCredential => true,
            GenerationErrorKind::TransportFailure {
                status_code: Some(401 | 403),
                ..
            } => true,
            GenerationErrorKind::TransportFailure {
                status_code: Some(400),
                message,
            } => {
                let lowered = message.to_lowercase();
                lowered.contains("api key") || lowered.contains("api_key")
            }
            _ => false,
        }
    }
}

/// Stage failure with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GenerationErrorKind {
        &self.kind
    }
}

/// Every provider-level failure is a transport failure from the pipeline's view.
impl From<GeminiError> for GenerationError {
    fn from(err: GeminiError) -> Self {
        let status_code = err.status_code();
        let message = match err.kind {
            GeminiErrorKind::HttpError { message, .. } => message,
            other => other.to_string(),
        };
        Self {
            kind: GenerationErrorKind::TransportFailure {
                status_code,
                message,
            },
            line: err.line,
            file: err.file,
        }
    }
}

/// Result type for stage operations.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
