//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GenerationError, JsonError, SessionError, StorageError};

/// Every error condition the workspace can surface.
///
/// # Examples
///
/// ```
/// use storyteller_error::{JsonError, StorytellerError};
///
/// let err: StorytellerError = JsonError::new("trailing comma").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StorytellerErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Credential storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Provider-level Gemini error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Stage failure
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Studio session transition refused
    #[from(SessionError)]
    Session(SessionError),
}

/// Storyteller error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyteller_error::{
///     GenerationError, GenerationErrorKind, StorytellerErrorKind, StorytellerResult,
/// };
///
/// fn generate() -> StorytellerResult<()> {
///     Err(GenerationError::new(GenerationErrorKind::EmptyResponse))?
/// }
///
/// let err = generate().unwrap_err();
/// assert!(matches!(err.kind(), StorytellerErrorKind::Generation(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyteller Error: {}", _0)]
pub struct StorytellerError(Box<StorytellerErrorKind>);

impl StorytellerError {
    /// Create a new error from a kind.
    pub fn new(kind: StorytellerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorytellerErrorKind {
        &self.0
    }
}

impl<T> From<T> for StorytellerError
where
    T: Into<StorytellerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Storyteller operations.
pub type StorytellerResult<T> = std::result::Result<T, StorytellerError>;
