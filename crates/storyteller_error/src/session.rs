//! Studio session error types.

/// Why a session transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Operation is not allowed from the current step
    #[display("Cannot {} while in the {} step", operation, step)]
    WrongStep {
        /// Operation that was attempted
        operation: &'static str,
        /// Step the session was in
        step: String,
    },
    /// Topic index outside the recommended list
    #[display("Topic {} is out of range ({} available)", index, available)]
    TopicOutOfRange {
        /// Requested index
        index: usize,
        /// Number of topics on offer
        available: usize,
    },
}

/// Session error with location tracking.
///
/// # Examples
///
/// ```
/// use storyteller_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::TopicOutOfRange { index: 7, available: 4 });
/// assert!(format!("{}", err).contains("4 available"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The kind of error that occurred
    pub kind: SessionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SessionError {
    /// Create a new session error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
