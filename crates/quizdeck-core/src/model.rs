//! Core data model types for quizdeck.
//!
//! These are the types the store persists and every other module builds on.
//! Field names serialize in camelCase because that is the layout of the
//! records already sitting in users' storage; changing the wire names would
//! orphan existing data.

use serde::{Deserialize, Deserializer, Serialize};

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Identifier, unique within the owning quiz.
    pub id: i64,
    /// The question text.
    pub question: String,
    /// Answer options in presentation order.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_answer: usize,
    /// Shown after answering (or before, in learn mode).
    pub explanation: String,
}

/// A quiz: either one of the built-in catalog entries or user-authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Unique text key, e.g. `"agent-fundamentals"` or `"custom-<uuid>"`.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Questions in presentation order (sessions may shuffle a copy).
    pub questions: Vec<Question>,
    /// `Some(true)` only for user-authored quizzes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

impl Quiz {
    /// The listing shape used by overview screens.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            question_count: self.questions.len(),
            is_custom: self.is_custom,
        }
    }
}

/// A quiz reduced to what a listing needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_custom: Option<bool>,
}

/// One graded answer within an attempt.
///
/// `is_correct` is computed once at submission time and persisted; it is
/// never recomputed, so history stays valid even if the quiz is later
/// edited or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswer {
    /// References a `Question::id` within the attempt's quiz.
    pub question_id: i64,
    /// Index into that question's options.
    pub selected_answer: usize,
    pub is_correct: bool,
}

/// One completed run through a quiz. Attempts are append-only: they are
/// never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    /// Globally unique identifier (UUID v4 in practice).
    pub id: String,
    pub quiz_id: String,
    /// Denormalized copy of the quiz title, frozen at completion time.
    pub quiz_title: String,
    pub answers: Vec<UserAnswer>,
    /// Count of correct answers.
    pub score: u32,
    pub total_questions: u32,
    /// Integer 0–100, `round(score / total_questions * 100)`.
    pub percentage: u32,
    /// RFC 3339 timestamp.
    pub completed_at: String,
    /// Whether the attempt was taken in learn mode. Older records may carry
    /// a non-boolean here; that reads as unset rather than rejecting the
    /// whole record.
    #[serde(
        default,
        deserialize_with = "lenient_opt_bool",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_learn_mode: Option<bool>,
}

/// The user's profile. At most one per store; setting a new one replaces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub username: String,
    /// RFC 3339 timestamp.
    pub created_at: String,
}

/// The aggregate persisted under the progress key: profile plus the full
/// attempt history. This is the entire record; it is read and written
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProgress {
    /// `None` until the user creates a profile; serializes as `null`.
    pub profile: Option<UserProfile>,
    pub attempts: Vec<QuizAttempt>,
}

fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_attempt() -> QuizAttempt {
        QuizAttempt {
            id: "a1".into(),
            quiz_id: "q1".into(),
            quiz_title: "Quiz One".into(),
            answers: vec![UserAnswer {
                question_id: 1,
                selected_answer: 2,
                is_correct: true,
            }],
            score: 1,
            total_questions: 1,
            percentage: 100,
            completed_at: "2024-01-02T00:00:00.000Z".into(),
            is_learn_mode: Some(false),
        }
    }

    #[test]
    fn progress_serializes_with_camel_case_wire_names() {
        let progress = UserProgress {
            profile: Some(UserProfile {
                username: "Ada".into(),
                created_at: "2024-01-01T00:00:00.000Z".into(),
            }),
            attempts: vec![sample_attempt()],
        };
        let json = serde_json::to_string(&progress).unwrap();
        for key in [
            "createdAt",
            "quizId",
            "quizTitle",
            "questionId",
            "selectedAnswer",
            "isCorrect",
            "totalQuestions",
            "completedAt",
            "isLearnMode",
        ] {
            assert!(json.contains(key), "missing wire key {key} in {json}");
        }
    }

    #[test]
    fn missing_profile_serializes_as_null() {
        let json = serde_json::to_string(&UserProgress::default()).unwrap();
        assert_eq!(json, r#"{"profile":null,"attempts":[]}"#);
    }

    #[test]
    fn progress_roundtrip() {
        let progress = UserProgress {
            profile: None,
            attempts: vec![sample_attempt()],
        };
        let json = serde_json::to_string(&progress).unwrap();
        let back: UserProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, progress);
    }

    #[test]
    fn mistyped_learn_mode_reads_as_unset() {
        let json = r#"{
            "id": "a1", "quizId": "q1", "quizTitle": "T", "answers": [],
            "score": 0, "totalQuestions": 5, "percentage": 0,
            "completedAt": "2024-01-02T00:00:00Z", "isLearnMode": "yes"
        }"#;
        let attempt: QuizAttempt = serde_json::from_str(json).unwrap();
        assert_eq!(attempt.is_learn_mode, None);
    }

    #[test]
    fn absent_is_custom_is_omitted_on_write() {
        let quiz = Quiz {
            id: "q".into(),
            title: "T".into(),
            description: "D".into(),
            questions: vec![],
            is_custom: None,
        };
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(!json.contains("isCustom"));
    }

    #[test]
    fn summary_counts_questions() {
        let quiz = Quiz {
            id: "q".into(),
            title: "T".into(),
            description: "D".into(),
            questions: vec![Question {
                id: 1,
                question: "?".into(),
                options: vec!["a".into(), "b".into()],
                correct_answer: 0,
                explanation: "e".into(),
            }],
            is_custom: Some(true),
        };
        let summary = quiz.summary();
        assert_eq!(summary.question_count, 1);
        assert_eq!(summary.is_custom, Some(true));
    }
}
