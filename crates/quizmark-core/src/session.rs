//! Practice session: the caller layer around the scoring engine.
//!
//! Picks questions, applies input policy, scores submissions, records them
//! in the history store and prepares reviews for display. Which question is
//! being practiced and in which mode is state held by the caller and passed
//! in on every call; the session keeps none of it.

use std::cell::Cell;
use std::sync::Arc;

use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::align::{align, Alignment};
use crate::classify::{classify, Classification};
use crate::error::QuizError;
use crate::model::{Question, QuizResult};
use crate::scoring::{score, ScoreBreakdown};
use crate::statistics::{compute_question_stats, QuestionStats};
use crate::traits::{HistoryStore, QuestionStore};

/// Default cap on stored questions.
pub const DEFAULT_MAX_QUESTIONS: usize = 9;

/// Configuration for a practice session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of questions the store may hold.
    pub max_questions: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_questions: DEFAULT_MAX_QUESTIONS,
        }
    }
}

/// How the next question is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeMode {
    /// The user picked this question.
    Select(u32),
    /// Uniformly random among all questions.
    Random,
}

/// Everything needed to display one scored attempt.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub question: Question,
    pub result: QuizResult,
    pub breakdown: ScoreBreakdown,
    pub alignment: Alignment,
    pub classification: Classification,
}

impl Review {
    /// Recompute the display data for a stored result.
    ///
    /// The alignment and breakdown are derived from the texts every time;
    /// the stored accuracy is what gets classified.
    pub fn build(question: &Question, result: &QuizResult) -> Self {
        Self {
            question: question.clone(),
            result: result.clone(),
            breakdown: score(&result.user_answer, &question.reference_answer),
            alignment: align(&result.user_answer, &question.reference_answer),
            classification: classify(result.accuracy),
        }
    }
}

/// Practice session over injected question and history stores.
pub struct PracticeSession {
    questions: Arc<dyn QuestionStore>,
    history: Arc<dyn HistoryStore>,
    config: SessionConfig,
}

impl PracticeSession {
    pub fn new(
        questions: Arc<dyn QuestionStore>,
        history: Arc<dyn HistoryStore>,
        config: SessionConfig,
    ) -> Self {
        Self {
            questions,
            history,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn questions(&self) -> Result<Vec<Question>> {
        self.questions.list()
    }

    pub fn history(&self) -> Result<Vec<QuizResult>> {
        self.history.list()
    }

    /// Add a question, enforcing non-empty text and the question limit.
    pub fn add_question(&self, prompt: &str, reference_answer: &str) -> Result<Question> {
        if prompt.trim().is_empty() || reference_answer.trim().is_empty() {
            return Err(QuizError::EmptyQuestion.into());
        }
        let count = self.questions.list()?.len();
        if count >= self.config.max_questions {
            return Err(QuizError::QuestionLimitReached {
                limit: self.config.max_questions,
            }
            .into());
        }

        let question = self.questions.add(prompt, reference_answer)?;
        tracing::info!(id = question.id, "added question");
        Ok(question)
    }

    /// Remove a question. Its past results stay in the history.
    pub fn remove_question(&self, id: u32) -> Result<()> {
        if !self.questions.remove(id)? {
            return Err(QuizError::QuestionNotFound(id).into());
        }
        tracing::info!(id, "removed question");
        Ok(())
    }

    pub fn question(&self, id: u32) -> Result<Question> {
        self.questions
            .get(id)?
            .ok_or_else(|| QuizError::QuestionNotFound(id).into())
    }

    /// Choose the question to practice.
    pub fn pick_question<R: Rng + ?Sized>(&self, mode: PracticeMode, rng: &mut R) -> Result<Question> {
        match mode {
            PracticeMode::Select(id) => self.question(id),
            PracticeMode::Random => {
                let questions = self.questions.list()?;
                let picked = questions.choose(rng).cloned().ok_or(QuizError::NoQuestions)?;
                tracing::debug!(id = picked.id, of = questions.len(), "picked random question");
                Ok(picked)
            }
        }
    }

    /// Score an answer to `question_id` and append it to the history.
    ///
    /// Empty or whitespace-only answers are rejected before scoring.
    pub fn submit(&self, question_id: u32, user_answer: &str) -> Result<QuizResult> {
        if user_answer.trim().is_empty() {
            return Err(QuizError::EmptyAnswer.into());
        }
        let question = self.question(question_id)?;

        let breakdown = score(user_answer, &question.reference_answer);
        let result = QuizResult::new(question.id, user_answer, breakdown.accuracy);
        self.history.append(result.clone())?;

        tracing::info!(
            question_id,
            accuracy = result.accuracy,
            distance = breakdown.distance,
            "recorded answer"
        );
        Ok(result)
    }

    /// Submit and immediately build the review for display.
    pub fn submit_and_review(&self, question_id: u32, user_answer: &str) -> Result<Review> {
        let result = self.submit(question_id, user_answer)?;
        let question = self.question(question_id)?;
        Ok(Review::build(&question, &result))
    }

    /// Review a stored attempt. `attempt` is 1-based in submission order;
    /// `None` means the latest.
    pub fn review_attempt(&self, question_id: u32, attempt: Option<usize>) -> Result<Review> {
        let question = self.question(question_id)?;
        let results = self.history.for_question(question_id)?;

        let index = match attempt {
            Some(n) if n >= 1 && n <= results.len() => n - 1,
            Some(n) => {
                return Err(QuizError::AttemptNotFound {
                    question_id,
                    attempt: n,
                }
                .into())
            }
            None if results.is_empty() => {
                return Err(QuizError::AttemptNotFound {
                    question_id,
                    attempt: 1,
                }
                .into())
            }
            None => results.len() - 1,
        };

        Ok(Review::build(&question, &results[index]))
    }

    /// Delete the `attempt`-th (1-based, submission order) result of a question.
    pub fn delete_attempt(&self, question_id: u32, attempt: usize) -> Result<()> {
        let seen = Cell::new(0usize);
        let removed = self.history.delete(&|r: &QuizResult| {
            if r.question_id != question_id {
                return false;
            }
            seen.set(seen.get() + 1);
            seen.get() == attempt
        })?;

        if removed == 0 {
            return Err(QuizError::AttemptNotFound {
                question_id,
                attempt,
            }
            .into());
        }
        tracing::info!(question_id, attempt, "deleted attempt");
        Ok(())
    }

    /// Delete the whole history. Returns how many results were removed.
    pub fn clear_history(&self) -> Result<usize> {
        let count = self.history.list()?.len();
        self.history.clear()?;
        tracing::info!(count, "cleared history");
        Ok(count)
    }

    /// Per-question attempt statistics.
    pub fn statistics(&self) -> Result<Vec<QuestionStats>> {
        Ok(compute_question_stats(
            &self.questions.list()?,
            &self.history.list()?,
        ))
    }
}
