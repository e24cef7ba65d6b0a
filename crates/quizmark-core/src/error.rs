//! Quiz error types.
//!
//! The scoring engine itself never fails; these cover the caller-side
//! policies (question limit, empty answers) and lookups against the
//! stores. Wrapped in `anyhow::Error` by the session so the CLI can
//! downcast them.

use thiserror::Error;

/// Errors raised around the engine when managing and practicing questions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// No question with this id exists.
    #[error("question {0} not found")]
    QuestionNotFound(u32),

    /// The typed answer is empty or whitespace only.
    #[error("answer is empty")]
    EmptyAnswer,

    /// A question was added without a prompt or a reference answer.
    #[error("question and answer must both be non-empty")]
    EmptyQuestion,

    /// The question store is full.
    #[error("question limit reached ({limit} questions)")]
    QuestionLimitReached { limit: usize },

    /// There are no questions to practice.
    #[error("no questions available, add one first")]
    NoQuestions,

    /// The largest stored question id is `u32::MAX`, so no new id exists.
    #[error("no question id left after {}", u32::MAX)]
    QuestionIdsExhausted,

    /// The question has fewer recorded attempts than requested.
    #[error("question {question_id} has no attempt #{attempt}")]
    AttemptNotFound { question_id: u32, attempt: usize },
}

impl QuizError {
    /// Returns `true` if the user can fix this by changing their input.
    pub fn is_user_input(&self) -> bool {
        matches!(self, QuizError::EmptyAnswer | QuizError::EmptyQuestion)
    }
}
