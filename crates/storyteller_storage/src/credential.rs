//! Credential resolution across the two storage scopes.

use crate::KeyValueStore;
use storyteller_core::{Credential, StorageScope};
use storyteller_error::StorytellerResult;
use tracing::{debug, info, instrument, warn};

/// Key under which the durable credential is stored.
pub const DURABLE_KEY: &str = "GEMINI_API_KEY";

/// Key under which the session-only credential is stored.
pub const SESSION_KEY: &str = "GEMINI_API_KEY_TEMP";

const RESOLUTION_ORDER: [(StorageScope, &str); 2] = [
    (StorageScope::Durable, DURABLE_KEY),
    (StorageScope::Session, SESSION_KEY),
];

/// Resolves and persists the caller's provider credential.
///
/// Resolution checks the durable scope first and the session scope second;
/// the first non-empty value wins. Credential syntax is not validated here.
#[derive(Debug)]
pub struct CredentialStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    /// Wrap a storage backend.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying backend.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the active credential, if any.
    ///
    /// A backend read failure is logged and treated as absence for that scope.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Option<Credential> {
        self.resolve_with_scope().map(|(_, credential)| credential)
    }

    /// Which scope the active credential resolves from.
    pub fn resolved_scope(&self) -> Option<StorageScope> {
        self.resolve_with_scope().map(|(scope, _)| scope)
    }

    fn resolve_with_scope(&self) -> Option<(StorageScope, Credential)> {
        for (scope, key) in RESOLUTION_ORDER {
            match self.store.get(scope, key) {
                Ok(Some(value)) if !value.is_empty() => {
                    debug!(%scope, "Resolved credential");
                    return Some((scope, Credential::new(value)));
                }
                Ok(_) => {}
                Err(e) => warn!(%scope, error = %e, "Failed to read credential scope"),
            }
        }
        debug!("No credential configured");
        None
    }

    /// Store `value` in the durable scope when `durable`, else in the session scope.
    ///
    /// The other scope is left untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the backend cannot write the chosen scope.
    #[instrument(skip(self, value))]
    pub fn persist(&self, value: &str, durable: bool) -> StorytellerResult<()> {
        let (scope, key) = if durable {
            (StorageScope::Durable, DURABLE_KEY)
        } else {
            (StorageScope::Session, SESSION_KEY)
        };

        self.store.set(scope, key, value)?;
        info!(%scope, "Credential persisted");
        Ok(())
    }
}
