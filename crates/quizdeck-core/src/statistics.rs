//! Aggregate progress statistics.
//!
//! Everything here is computed from the attempt history the store hands
//! back; nothing is persisted. Percentages come from the attempts as
//! recorded — they are trusted, not recomputed from answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Quiz, QuizAttempt};

/// Best recorded percentage at or above which a quiz counts as mastered.
pub const MASTERY_THRESHOLD: u32 = 80;

/// Dashboard-level aggregate over the whole attempt history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_attempts: u32,
    /// Correct answers summed across all attempts.
    pub total_correct: u32,
    /// Questions seen summed across all attempts.
    pub total_questions: u32,
    /// Rounded mean of the per-attempt percentages, 0 with no attempts.
    pub average_percentage: u32,
    /// Quizzes (from the given set) whose best score meets the threshold.
    pub quizzes_mastered: u32,
}

/// One quiz's standing: best score and how often it was attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizStanding {
    pub quiz_id: String,
    pub best_percentage: Option<u32>,
    pub attempt_count: u32,
}

/// Highest recorded percentage for `quiz_id`, `None` with no attempts.
pub fn best_percentage(attempts: &[QuizAttempt], quiz_id: &str) -> Option<u32> {
    attempts
        .iter()
        .filter(|attempt| attempt.quiz_id == quiz_id)
        .map(|attempt| attempt.percentage)
        .max()
}

/// Rounded mean of all attempt percentages, 0 with no attempts.
pub fn average_percentage(attempts: &[QuizAttempt]) -> u32 {
    if attempts.is_empty() {
        return 0;
    }
    let sum: u64 = attempts.iter().map(|a| u64::from(a.percentage)).sum();
    (sum as f64 / attempts.len() as f64).round() as u32
}

/// Whether the best score for `quiz_id` meets [`MASTERY_THRESHOLD`].
pub fn is_mastered(attempts: &[QuizAttempt], quiz_id: &str) -> bool {
    best_percentage(attempts, quiz_id).is_some_and(|best| best >= MASTERY_THRESHOLD)
}

/// Aggregate the history against a quiz set (built-in plus custom).
pub fn summarize(attempts: &[QuizAttempt], quizzes: &[Quiz]) -> ProgressSummary {
    ProgressSummary {
        total_attempts: attempts.len() as u32,
        total_correct: attempts.iter().map(|a| a.score).sum(),
        total_questions: attempts.iter().map(|a| a.total_questions).sum(),
        average_percentage: average_percentage(attempts),
        quizzes_mastered: quizzes
            .iter()
            .filter(|quiz| is_mastered(attempts, &quiz.id))
            .count() as u32,
    }
}

/// Per-quiz standings, in the order the quizzes are given.
pub fn standings(attempts: &[QuizAttempt], quizzes: &[Quiz]) -> Vec<QuizStanding> {
    quizzes
        .iter()
        .map(|quiz| QuizStanding {
            quiz_id: quiz.id.clone(),
            best_percentage: best_percentage(attempts, &quiz.id),
            attempt_count: attempts
                .iter()
                .filter(|attempt| attempt.quiz_id == quiz.id)
                .count() as u32,
        })
        .collect()
}

/// Up to `limit` attempts, most recently completed first. Attempts whose
/// timestamp does not parse sort as oldest; equal timestamps keep history
/// order.
pub fn recent<'a>(attempts: &'a [QuizAttempt], limit: usize) -> Vec<&'a QuizAttempt> {
    let mut ordered: Vec<&QuizAttempt> = attempts.iter().collect();
    ordered.sort_by(|a, b| completed_at(b).cmp(&completed_at(a)));
    ordered.truncate(limit);
    ordered
}

fn completed_at(attempt: &QuizAttempt) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(&attempt.completed_at)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
