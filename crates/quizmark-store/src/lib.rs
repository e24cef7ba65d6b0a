//! quizmark-store: Storage backends and configuration.
//!
//! Implements the `QuestionStore` and `HistoryStore` traits from
//! `quizmark-core` over JSON files and in memory, and loads the
//! `quizmark.toml` configuration that says where the files live.

pub mod config;
pub mod error;
pub mod json;
pub mod memory;

pub use config::{load_config_from, open_stores, QuizmarkConfig};
pub use error::StoreError;
pub use json::{JsonHistoryStore, JsonQuestionStore};
pub use memory::{MemoryHistoryStore, MemoryQuestionStore};
