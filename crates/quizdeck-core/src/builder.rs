//! Authoring of custom quizzes.
//!
//! A [`QuizDraft`] holds raw form input. [`QuizDraft::build`] checks it,
//! sanitizes every text field through the [`crate::validate::limits`], drops
//! blank options, and produces a `Quiz` ready for the store.

use thiserror::Error;
use uuid::Uuid;

use crate::model::{Question, Quiz};
use crate::validate::{limits, sanitize_text};

/// Raw, unvalidated quiz form input.
#[derive(Debug, Clone, Default)]
pub struct QuizDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDraft>,
}

/// Raw question form input.
#[derive(Debug, Clone)]
pub struct QuestionDraft {
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options` (including blank ones) of the correct answer.
    pub correct_answer: usize,
    pub explanation: String,
}

impl QuestionDraft {
    /// A blank question with the standard four option slots.
    pub fn empty() -> Self {
        Self {
            question: String::new(),
            options: vec![String::new(); 4],
            correct_answer: 0,
            explanation: String::new(),
        }
    }
}

/// The draft did not pass the authoring checks.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid quiz draft: {}", problems.join("; "))]
pub struct DraftError {
    pub problems: Vec<String>,
}

impl QuizDraft {
    /// Everything wrong with the draft, in form order. Empty means buildable.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.title.trim().is_empty() {
            problems.push("quiz title is required".to_string());
        }
        if self.description.trim().is_empty() {
            problems.push("quiz description is required".to_string());
        }
        if self.questions.is_empty() {
            problems.push("at least one question is required".to_string());
        }

        for (index, question) in self.questions.iter().enumerate() {
            let n = index + 1;
            if question.question.trim().is_empty() {
                problems.push(format!("question {n}: question text is required"));
            }
            let filled = question
                .options
                .iter()
                .filter(|option| !option.trim().is_empty())
                .count();
            if filled < 2 {
                problems.push(format!("question {n}: at least 2 options are required"));
            }
            let correct_is_blank = question
                .options
                .get(question.correct_answer)
                .is_none_or(|option| option.trim().is_empty());
            if correct_is_blank {
                problems.push(format!(
                    "question {n}: the correct answer option cannot be empty"
                ));
            }
            if question.explanation.trim().is_empty() {
                problems.push(format!("question {n}: an explanation is required"));
            }
        }

        problems
    }

    /// Build the draft into a custom quiz.
    ///
    /// Blank options are dropped and the correct-answer index is remapped to
    /// the surviving options. Question ids are renumbered from 1 in form
    /// order. The quiz id is `custom-<uuid>` and `is_custom` is set.
    pub fn build(&self) -> Result<Quiz, DraftError> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(DraftError { problems });
        }

        let questions = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                // The checks above guarantee the correct option is non-blank,
                // so it survives the filter; its new index is the count of
                // non-blank options before it.
                let correct_answer = draft.options[..draft.correct_answer]
                    .iter()
                    .filter(|option| !option.trim().is_empty())
                    .count();
                Question {
                    id: index as i64 + 1,
                    question: sanitize_text(&draft.question, limits::QUESTION_TEXT),
                    options: draft
                        .options
                        .iter()
                        .filter(|option| !option.trim().is_empty())
                        .map(|option| sanitize_text(option, limits::OPTION_TEXT))
                        .collect(),
                    correct_answer,
                    explanation: sanitize_text(&draft.explanation, limits::EXPLANATION_TEXT),
                }
            })
            .collect();

        Ok(Quiz {
            id: format!("custom-{}", Uuid::new_v4()),
            title: sanitize_text(&self.title, limits::QUIZ_TITLE),
            description: sanitize_text(&self.description, limits::QUIZ_DESCRIPTION),
            questions,
            is_custom: Some(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuizDraft {
        QuizDraft {
            title: "  My Quiz  ".into(),
            description: "About things".into(),
            questions: vec![QuestionDraft {
                question: "Pick b".into(),
                options: vec!["a".into(), "b".into(), String::new(), String::new()],
                correct_answer: 1,
                explanation: "b is right".into(),
            }],
        }
    }

    #[test]
    fn valid_draft_builds_a_custom_quiz() {
        let quiz = draft().build().unwrap();
        assert!(quiz.id.starts_with("custom-"));
        assert_eq!(quiz.title, "My Quiz");
        assert_eq!(quiz.is_custom, Some(true));
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].id, 1);
        assert_eq!(quiz.questions[0].options, vec!["a", "b"]);
        assert_eq!(quiz.questions[0].correct_answer, 1);
    }

    #[test]
    fn blank_options_before_the_correct_one_remap_its_index() {
        let mut draft = draft();
        draft.questions[0].options = vec![String::new(), "a".into(), "b".into(), String::new()];
        draft.questions[0].correct_answer = 2;
        let quiz = draft.build().unwrap();
        assert_eq!(quiz.questions[0].options, vec!["a", "b"]);
        assert_eq!(quiz.questions[0].correct_answer, 1);
        assert_eq!(quiz.questions[0].options[quiz.questions[0].correct_answer], "b");
    }

    #[test]
    fn reports_every_problem_in_form_order() {
        let draft = QuizDraft {
            title: String::new(),
            description: String::new(),
            questions: vec![QuestionDraft {
                question: String::new(),
                options: vec!["only".into()],
                correct_answer: 3,
                explanation: String::new(),
            }],
        };
        let problems = draft.problems();
        assert_eq!(
            problems,
            vec![
                "quiz title is required",
                "quiz description is required",
                "question 1: question text is required",
                "question 1: at least 2 options are required",
                "question 1: the correct answer option cannot be empty",
                "question 1: an explanation is required",
            ]
        );
        assert!(draft.build().is_err());
    }

    #[test]
    fn a_draft_with_no_questions_is_rejected() {
        let draft = QuizDraft {
            title: "T".into(),
            description: "D".into(),
            questions: vec![],
        };
        assert_eq!(draft.problems(), vec!["at least one question is required"]);
    }

    #[test]
    fn long_fields_are_truncated_not_rejected() {
        let mut draft = draft();
        draft.title = "t".repeat(500);
        let quiz = draft.build().unwrap();
        assert_eq!(quiz.title.chars().count(), limits::QUIZ_TITLE);
    }

    #[test]
    fn questions_are_renumbered_in_form_order() {
        let mut draft = draft();
        let mut second = draft.questions[0].clone();
        second.question = "Pick a".into();
        second.correct_answer = 0;
        draft.questions.push(second);
        let quiz = draft.build().unwrap();
        assert_eq!(quiz.questions[0].id, 1);
        assert_eq!(quiz.questions[1].id, 2);
    }
}
