//! Single-file JSON backend.
//!
//! The native analog of browser local storage: one JSON object mapping keys
//! to string values, loaded once at open and rewritten whole on every
//! mutation. Writes go through a sibling temp file and a rename so a crash
//! mid-write leaves the previous contents intact.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::backend::StorageBackend;
use crate::error::BackendError;

/// [`StorageBackend`] over one JSON map file.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileBackend {
    /// Open the backend at `path`. A missing file starts empty; an existing
    /// file that is not a valid map is an error (the caller decides whether
    /// to delete it, not this layer).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BackendError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(BackendError::CorruptFile)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), BackendError> {
        let text = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| BackendError::Unavailable(format!("encoding backing map: {err}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), BackendError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), BackendError> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
