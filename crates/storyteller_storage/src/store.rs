//! Storage trait definition.

use storyteller_core::StorageScope;
use storyteller_error::StorytellerResult;

/// Scoped key-value capability backing the credential store.
///
/// Each operation is an atomic single-key read or write. There are no
/// cross-key transactions.
pub trait KeyValueStore: Send + Sync {
    /// Read `key` from `scope`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the key has never been written in that scope.
    fn get(&self, scope: StorageScope, key: &str) -> StorytellerResult<Option<String>>;

    /// Write `value` under `key` in `scope`, replacing any previous value.
    ///
    /// Writing one scope never touches the other.
    fn set(&self, scope: StorageScope, key: &str, value: &str) -> StorytellerResult<()>;
}
