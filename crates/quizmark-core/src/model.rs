//! Core data model types for quizmark.
//!
//! Field names serialize in camelCase so history exported from the
//! browser version of the quiz (`quiz_questions` / `quiz_history`) loads
//! unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::scoring::round_to_tenth;

/// A practice question with its reference answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Positive, unique within a store.
    pub id: u32,
    /// The text shown to the user.
    #[serde(alias = "question")]
    pub prompt: String,
    /// The answer typed answers are scored against.
    #[serde(alias = "answer")]
    pub reference_answer: String,
}

impl Question {
    pub fn new(id: u32, prompt: impl Into<String>, reference_answer: impl Into<String>) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            reference_answer: reference_answer.into(),
        }
    }
}

/// One submitted answer and its score. Never modified once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// The question this answers.
    pub question_id: u32,
    /// The answer exactly as typed, before normalization.
    pub user_answer: String,
    /// Accuracy in `[0, 100]`, one decimal place.
    pub accuracy: f64,
    /// When the answer was submitted.
    pub timestamp: DateTime<Utc>,
}

impl QuizResult {
    /// Build a result stamped with the current time.
    pub fn new(question_id: u32, user_answer: impl Into<String>, accuracy: f64) -> Self {
        Self::at(question_id, user_answer, accuracy, Utc::now())
    }

    /// Build a result with an explicit timestamp. `accuracy` is clamped to
    /// `[0, 100]` and rounded to one decimal.
    pub fn at(
        question_id: u32,
        user_answer: impl Into<String>,
        accuracy: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let accuracy = if accuracy.is_nan() {
            0.0
        } else {
            round_to_tenth(accuracy.clamp(0.0, 100.0))
        };
        Self {
            question_id,
            user_answer: user_answer.into(),
            accuracy,
            timestamp,
        }
    }
}

/// Next id for a new question: one past the largest existing id.
///
/// Fails once the largest id is `u32::MAX`; ids are never wrapped or reused
/// from below.
pub fn next_question_id(questions: &[Question]) -> Result<u32, QuizError> {
    questions
        .iter()
        .map(|q| q.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or(QuizError::QuestionIdsExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_serializes_camel_case() {
        let q = Question::new(1, "What is Rust?", "A systems language.");
        let json = serde_json::to_string(&q).unwrap();
        assert!(json.contains("\"referenceAnswer\""));
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn question_accepts_browser_field_names() {
        let json = r#"{"id": 3, "question": "Capital of France?", "answer": "Paris"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 3);
        assert_eq!(q.prompt, "Capital of France?");
        assert_eq!(q.reference_answer, "Paris");
    }

    #[test]
    fn result_matches_browser_history_format() {
        let json = r#"{
            "questionId": 2,
            "userAnswer": "paris",
            "accuracy": 100,
            "timestamp": "2025-01-01T10:00:00.000Z"
        }"#;
        let r: QuizResult = serde_json::from_str(json).unwrap();
        assert_eq!(r.question_id, 2);
        assert_eq!(r.user_answer, "paris");
        assert_eq!(r.accuracy, 100.0);
        assert_eq!(r.timestamp.to_rfc3339(), "2025-01-01T10:00:00+00:00");
    }

    #[test]
    fn result_accuracy_is_clamped_and_rounded() {
        assert_eq!(QuizResult::new(1, "x", 66.666).accuracy, 66.7);
        assert_eq!(QuizResult::new(1, "x", 140.0).accuracy, 100.0);
        assert_eq!(QuizResult::new(1, "x", -3.0).accuracy, 0.0);
        assert_eq!(QuizResult::new(1, "x", f64::NAN).accuracy, 0.0);
    }

    #[test]
    fn result_keeps_answer_verbatim() {
        let r = QuizResult::new(1, "  Hello, World!  ", 100.0);
        assert_eq!(r.user_answer, "  Hello, World!  ");
    }

    #[test]
    fn next_id_is_one_past_max() {
        assert_eq!(next_question_id(&[]), Ok(1));
        let qs = vec![Question::new(4, "a", "b"), Question::new(2, "c", "d")];
        assert_eq!(next_question_id(&qs), Ok(5));
    }

    #[test]
    fn next_id_after_max_id_is_an_error() {
        let qs = vec![Question::new(u32::MAX, "a", "b")];
        assert_eq!(next_question_id(&qs), Err(QuizError::QuestionIdsExhausted));

        let qs = vec![Question::new(u32::MAX - 1, "a", "b")];
        assert_eq!(next_question_id(&qs), Ok(u32::MAX));
    }
}
