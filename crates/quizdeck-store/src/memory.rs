//! In-memory backend.
//!
//! The test and ephemeral-use backend. Beyond the plain map it can emulate
//! the two interesting failure modes of real browser storage (a byte quota
//! and the backend going away entirely) so the store's degradation paths
//! can be driven without a browser.

use std::collections::HashMap;

use crate::backend::StorageBackend;
use crate::error::BackendError;

/// HashMap-backed [`StorageBackend`].
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    quota_bytes: Option<usize>,
    offline: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that rejects writes once keys plus values would exceed
    /// `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Toggle the unavailable state; while offline every operation fails.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn stored_bytes(&self) -> usize {
        self.entries
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }

    fn check_online(&self) -> Result<(), BackendError> {
        if self.offline {
            return Err(BackendError::Unavailable("backend is offline".into()));
        }
        Ok(())
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        self.check_online()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.check_online()?;
        if let Some(quota) = self.quota_bytes {
            let existing = self.entries.get(key).map_or(0, |v| key.len() + v.len());
            let after = self.stored_bytes() - existing + key.len() + value.len();
            if after > quota {
                return Err(BackendError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), BackendError> {
        self.check_online()?;
        self.entries.remove(key);
        Ok(())
    }
}
