//! The persisted quiz store.
//!
//! [`QuizStore`] is the sole authority over the two persisted records: the
//! progress record (profile + attempt history) and the custom quiz list.
//! Its public contract is total: no operation returns an error. Reads that
//! hit missing, unparseable, or mis-shaped data come back as the documented
//! default; writes that fail are dropped. Both paths log, so the data loss
//! is visible in telemetry even though callers never see it.
//!
//! Mutations are read-modify-write over the whole record: load, edit in
//! memory, overwrite. Two stores sharing one backend therefore race as
//! last-writer-wins — a concurrently appended attempt can be silently lost.
//! That limitation is accepted, not hidden; callers needing stronger
//! guarantees must serialize access themselves.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use quizdeck_core::model::{Quiz, QuizAttempt, UserProfile, UserProgress};
use quizdeck_core::validate;

use crate::backend::StorageBackend;
use crate::error::StorageError;

/// Key holding the progress record.
pub const PROGRESS_KEY: &str = "quizdeck.progress";
/// Key holding the custom quiz list.
pub const CUSTOM_QUIZZES_KEY: &str = "quizdeck.custom-quizzes";

/// Validated, best-effort storage over an injected backend.
#[derive(Debug)]
pub struct QuizStore<B> {
    backend: B,
}

impl<B: StorageBackend> QuizStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct backend access, bypassing validation. Useful for tests and
    /// for maintenance tooling; normal callers never need it.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ------------------------------------------------------------------
    // Progress record
    // ------------------------------------------------------------------

    /// The progress record, or the default (no profile, no attempts) when
    /// the key is absent or the stored data is unusable.
    pub fn progress(&self) -> UserProgress {
        read_or_default(self.load(PROGRESS_KEY, validate::validate_user_progress))
    }

    /// Overwrite the progress record. A failed write is logged and dropped.
    pub fn save_progress(&mut self, progress: &UserProgress) {
        self.persist(PROGRESS_KEY, progress);
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.progress().profile
    }

    /// Replace the profile, keeping the attempt history.
    pub fn set_profile(&mut self, profile: UserProfile) {
        let mut progress = self.progress();
        progress.profile = Some(profile);
        self.save_progress(&progress);
    }

    pub fn attempts(&self) -> Vec<QuizAttempt> {
        self.progress().attempts
    }

    /// Attempts for one quiz, in the order they were recorded.
    pub fn attempts_for_quiz(&self, quiz_id: &str) -> Vec<QuizAttempt> {
        self.attempts()
            .into_iter()
            .filter(|attempt| attempt.quiz_id == quiz_id)
            .collect()
    }

    /// Append an attempt. The id is taken as-is; the store does not
    /// deduplicate, and `percentage` is trusted, not recomputed.
    pub fn add_attempt(&mut self, attempt: QuizAttempt) {
        let mut progress = self.progress();
        progress.attempts.push(attempt);
        self.save_progress(&progress);
    }

    /// Highest recorded percentage for a quiz, `None` with no attempts.
    pub fn best_score(&self, quiz_id: &str) -> Option<u32> {
        self.attempts()
            .iter()
            .filter(|attempt| attempt.quiz_id == quiz_id)
            .map(|attempt| attempt.percentage)
            .max()
    }

    /// Remove the progress record entirely. The next read returns the
    /// default.
    pub fn clear_progress(&mut self) {
        if let Err(err) = self.backend.remove(PROGRESS_KEY) {
            tracing::error!(key = PROGRESS_KEY, error = %err, "failed to clear record");
        }
    }

    // ------------------------------------------------------------------
    // Custom quizzes
    // ------------------------------------------------------------------

    /// All custom quizzes in append order; empty when the key is absent or
    /// the stored data is unusable.
    pub fn custom_quizzes(&self) -> Vec<Quiz> {
        read_or_default(self.load(CUSTOM_QUIZZES_KEY, validate::validate_quiz_list))
    }

    /// Append a custom quiz. Id uniqueness is the caller's responsibility;
    /// the store does not check it.
    pub fn save_custom_quiz(&mut self, quiz: Quiz) {
        let mut quizzes = self.custom_quizzes();
        quizzes.push(quiz);
        self.persist(CUSTOM_QUIZZES_KEY, &quizzes);
    }

    /// Remove every custom quiz with the given id. Unknown ids are a no-op.
    pub fn delete_custom_quiz(&mut self, quiz_id: &str) {
        let mut quizzes = self.custom_quizzes();
        quizzes.retain(|quiz| quiz.id != quiz_id);
        self.persist(CUSTOM_QUIZZES_KEY, &quizzes);
    }

    /// The first custom quiz with the given id.
    pub fn custom_quiz(&self, quiz_id: &str) -> Option<Quiz> {
        self.custom_quizzes()
            .into_iter()
            .find(|quiz| quiz.id == quiz_id)
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn load<T: DeserializeOwned>(
        &self,
        key: &'static str,
        is_valid: fn(&Value) -> bool,
    ) -> Result<Option<T>, StorageError> {
        let Some(text) = self
            .backend
            .get(key)
            .map_err(|source| StorageError::Read { key, source })?
        else {
            return Ok(None);
        };
        let value: Value =
            serde_json::from_str(&text).map_err(|source| StorageError::Parse { key, source })?;
        if !is_valid(&value) {
            return Err(StorageError::Shape { key });
        }
        let record = serde_json::from_value(value)
            .map_err(|source| StorageError::Decode { key, source })?;
        Ok(Some(record))
    }

    fn persist<T: Serialize>(&mut self, key: &'static str, record: &T) {
        let result = serde_json::to_string(record)
            .map_err(|source| StorageError::Serialize { key, source })
            .and_then(|text| {
                self.backend
                    .set(key, &text)
                    .map_err(|source| StorageError::Write { key, source })
            });
        if let Err(err) = result {
            tracing::error!(key, error = %err, "write dropped");
        }
    }
}

/// The degrade-to-default policy: an absent record is the default, bad
/// stored data is discarded wholesale with a warning, and a failing backend
/// is logged as an error. Used by every public read.
fn read_or_default<T: Default>(result: Result<Option<T>, StorageError>) -> T {
    match result {
        Ok(Some(record)) => record,
        Ok(None) => T::default(),
        Err(err) if err.is_data_error() => {
            tracing::warn!(error = %err, "discarding stored record, using default");
            T::default()
        }
        Err(err) => {
            tracing::error!(error = %err, "backend read failed, using default");
            T::default()
        }
    }
}
