//! Caller-held API credential and the scopes it can be stored in.

use std::fmt;

/// Opaque provider credential.
///
/// `Debug` is redacted and there is no `Display`, so the value cannot end up
/// in logs by accident. Use [`Credential::expose`] only when building the
/// authentication header.
///
/// # Examples
///
/// ```
/// use storyteller_core::Credential;
///
/// let key = Credential::new("AIzaSyExample");
/// assert_eq!(key.expose(), "AIzaSyExample");
/// assert!(!format!("{:?}", key).contains("AIza"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw credential value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw value, for the provider authentication parameter only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Lifetime of a stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StorageScope {
    /// Survives restarts
    Durable,
    /// Cleared when the session (process) ends
    Session,
}
