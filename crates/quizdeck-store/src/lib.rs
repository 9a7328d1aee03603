//! quizdeck-store — best-effort persisted storage for quizdeck.
//!
//! Implements the [`StorageBackend`] seam over an in-memory map and a JSON
//! file, and the [`QuizStore`] on top: the sole authority for reading and
//! writing the progress record and the custom quiz list. Everything handed
//! back to callers has passed shape validation; corrupt or missing data
//! degrades to documented defaults instead of surfacing errors.

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use backend::StorageBackend;
pub use error::{BackendError, StorageError};
pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use store::{QuizStore, CUSTOM_QUIZZES_KEY, PROGRESS_KEY};
