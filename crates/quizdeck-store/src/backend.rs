//! The storage backend seam.

use crate::error::BackendError;

/// A synchronous, string-keyed, string-valued persistent map.
///
/// This is everything the store assumes about its environment: browser
/// local storage, a file on disk, or a plain map in tests all fit behind
/// it. Implementations are expected to complete near-instantly and to hold
/// at most a few megabytes; there are no transactions and no change
/// notifications.
pub trait StorageBackend {
    /// The value stored under `key`, `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, BackendError>;

    /// Store `value` under `key`, replacing any existing value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), BackendError>;
}
