//! Storage traits for questions and answer history.
//!
//! The engine never touches storage; the practice session and the CLI
//! receive these as injected collaborators. Implementations live in the
//! `quizmark-store` crate (JSON files, in-memory).

use anyhow::Result;

use crate::model::{Question, QuizResult};

// ---------------------------------------------------------------------------
// Question store
// ---------------------------------------------------------------------------

/// Ordered set of practice questions.
pub trait QuestionStore: Send + Sync {
    /// All questions, in insertion order.
    fn list(&self) -> Result<Vec<Question>>;

    /// Look up one question by id.
    fn get(&self, id: u32) -> Result<Option<Question>> {
        Ok(self.list()?.into_iter().find(|q| q.id == id))
    }

    /// Store a new question and return it with its assigned id.
    fn add(&self, prompt: &str, reference_answer: &str) -> Result<Question>;

    /// Remove a question. Returns `false` if it did not exist.
    fn remove(&self, id: u32) -> Result<bool>;

    /// Remove every question.
    fn clear(&self) -> Result<()>;
}

// ---------------------------------------------------------------------------
// History store
// ---------------------------------------------------------------------------

/// Append-only log of submitted results. Order is submission order and is
/// never rearranged; entries can only be removed.
pub trait HistoryStore: Send + Sync {
    /// Append a result at the end of the log.
    fn append(&self, result: QuizResult) -> Result<()>;

    /// All results, oldest first.
    fn list(&self) -> Result<Vec<QuizResult>>;

    /// Remove every result matching `predicate`. Returns how many were removed.
    fn delete(&self, predicate: &dyn Fn(&QuizResult) -> bool) -> Result<usize>;

    /// Remove every result.
    fn clear(&self) -> Result<()> {
        self.delete(&|_| true).map(|_| ())
    }

    /// Results for one question, oldest first.
    fn for_question(&self, question_id: u32) -> Result<Vec<QuizResult>> {
        Ok(self
            .list()?
            .into_iter()
            .filter(|r| r.question_id == question_id)
            .collect())
    }
}
