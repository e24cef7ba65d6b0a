//! quizmark-core: Answer scoring engine, data model, and store traits.
//!
//! The engine compares a typed answer with a reference answer: it
//! normalizes both texts, scores them by edit distance, aligns them
//! character by character for highlighting, and classifies the score
//! into a feedback band. Everything else in quizmark builds on this crate.

pub mod align;
pub mod classify;
pub mod error;
mod grid;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod scoring;
pub mod session;
pub mod statistics;
pub mod traits;

pub use align::{align, Alignment, Span};
pub use classify::{classify, AccuracyBand, Classification};
pub use error::QuizError;
pub use model::{Question, QuizResult};
pub use normalize::{normalize, NormalizedText};
pub use scoring::{accuracy, levenshtein, score, ScoreBreakdown};
