//! Quiz-taking sessions.
//!
//! A [`QuizSession`] walks a user through one quiz: optionally shuffled
//! question order, one graded answer per question, and completion into an
//! immutable [`QuizAttempt`]. Grading happens exactly once, at submission;
//! the recorded `is_correct` flags are never recomputed, so an attempt stays
//! meaningful even if the quiz is later edited or deleted.

use chrono::{SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Question, Quiz, QuizAttempt, UserAnswer};

/// Errors from driving a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Every question has already been answered.
    #[error("all {0} questions have already been answered")]
    AlreadyComplete(usize),

    /// The selected option index does not exist on the current question.
    #[error("selected option {selected} is out of range for {available} options")]
    AnswerOutOfRange { selected: usize, available: usize },
}

/// How a session presents the quiz.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Randomize question order before starting.
    pub shuffle: bool,
    /// Learn mode: explanations are shown before answering. Recorded on the
    /// attempt so history can distinguish practice runs.
    pub learn_mode: bool,
}

/// In-progress run through one quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_id: String,
    quiz_title: String,
    questions: Vec<Question>,
    answers: Vec<UserAnswer>,
    learn_mode: bool,
}

impl QuizSession {
    /// Start a session, using the thread RNG when shuffling.
    pub fn new(quiz: &Quiz, options: SessionOptions) -> Self {
        Self::with_rng(quiz, options, &mut rand::rng())
    }

    /// Start a session with an explicit RNG. Tests pass a seeded RNG to get
    /// a reproducible question order.
    pub fn with_rng<R: Rng + ?Sized>(quiz: &Quiz, options: SessionOptions, rng: &mut R) -> Self {
        let mut questions = quiz.questions.clone();
        if options.shuffle {
            questions.shuffle(rng);
        }
        Self {
            quiz_id: quiz.id.clone(),
            quiz_title: quiz.title.clone(),
            questions,
            answers: Vec::new(),
            learn_mode: options.learn_mode,
        }
    }

    /// The questions in the order this session presents them.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Zero-based index of the question awaiting an answer.
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    /// The question awaiting an answer, `None` once the session is complete.
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.answers.len())
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() >= self.questions.len()
    }

    /// Answers recorded so far, in presentation order.
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    /// Count of correct answers so far.
    pub fn score(&self) -> u32 {
        self.answers.iter().filter(|a| a.is_correct).count() as u32
    }

    /// Grade `selected` against the current question, record the answer, and
    /// advance. Returns whether the answer was correct.
    pub fn submit(&mut self, selected: usize) -> Result<bool, SessionError> {
        let Some(question) = self.questions.get(self.answers.len()) else {
            return Err(SessionError::AlreadyComplete(self.questions.len()));
        };
        if selected >= question.options.len() {
            return Err(SessionError::AnswerOutOfRange {
                selected,
                available: question.options.len(),
            });
        }
        let is_correct = selected == question.correct_answer;
        self.answers.push(UserAnswer {
            question_id: question.id,
            selected_answer: selected,
            is_correct,
        });
        Ok(is_correct)
    }

    /// Finish the session into an attempt with a fresh UUID and the current
    /// time. Finishing early is allowed; unanswered questions simply count
    /// against the score.
    pub fn finish(self) -> QuizAttempt {
        let completed_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.finish_as(Uuid::new_v4().to_string(), completed_at)
    }

    /// Finish with an explicit id and timestamp.
    pub fn finish_as(self, id: impl Into<String>, completed_at: impl Into<String>) -> QuizAttempt {
        let total_questions = self.questions.len() as u32;
        let score = self.score();
        QuizAttempt {
            id: id.into(),
            quiz_id: self.quiz_id,
            quiz_title: self.quiz_title,
            answers: self.answers,
            score,
            total_questions,
            percentage: percentage(score, total_questions),
            completed_at: completed_at.into(),
            is_learn_mode: Some(self.learn_mode),
        }
    }
}

fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(score) / f64::from(total)) * 100.0).round() as u32
}
