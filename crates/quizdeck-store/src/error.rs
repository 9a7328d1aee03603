//! Storage error types.
//!
//! Defined so the degrade-to-default policy in [`crate::store`] is
//! type-visible rather than ambient: internal operations return
//! `Result<_, StorageError>`, and exactly one helper converts failures into
//! the documented defaults. Callers of the public store API never see these.

use thiserror::Error;

/// Failures at the key-value backend itself.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend's capacity is exhausted.
    #[error("storage quota exceeded")]
    QuotaExceeded,

    /// The backend cannot currently serve requests.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// The backing file exists but does not hold a valid key-value map.
    #[error("backing file is corrupt: {0}")]
    CorruptFile(#[source] serde_json::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reading or writing a persisted record.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("reading '{key}' failed: {source}")]
    Read {
        key: &'static str,
        source: BackendError,
    },

    #[error("writing '{key}' failed: {source}")]
    Write {
        key: &'static str,
        source: BackendError,
    },

    /// The stored text is not JSON at all.
    #[error("value under '{key}' is not valid JSON: {source}")]
    Parse {
        key: &'static str,
        source: serde_json::Error,
    },

    /// The stored JSON does not match the expected record shape.
    #[error("value under '{key}' does not match the expected record shape")]
    Shape { key: &'static str },

    /// The shape check passed but the typed model could not hold the value
    /// (e.g. a fractional id).
    #[error("decoding the record under '{key}' failed: {source}")]
    Decode {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("serializing the record for '{key}' failed: {source}")]
    Serialize {
        key: &'static str,
        source: serde_json::Error,
    },
}

impl StorageError {
    /// True when the stored bytes themselves are bad, as opposed to the
    /// backend failing to serve them. Drives the log level on fallback.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            StorageError::Parse { .. } | StorageError::Shape { .. } | StorageError::Decode { .. }
        )
    }
}
