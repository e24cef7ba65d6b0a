//! One module per subcommand.

use std::path::Path;

use anyhow::Result;

use quizmark_core::session::PracticeSession;
use quizmark_store::{load_config_from, open_stores, QuizmarkConfig};

pub mod add;
pub mod ask;
pub mod clear_history;
pub mod delete;
pub mod history;
pub mod import;
pub mod init;
pub mod list;
pub mod remove;
pub mod review;
pub mod score;
pub mod validate;

/// Load the configuration and open a session over its JSON stores.
pub fn open_session(config_path: Option<&Path>) -> Result<(QuizmarkConfig, PracticeSession)> {
    let config = load_config_from(config_path)?;
    let (questions, history) = open_stores(&config);
    tracing::debug!(data_dir = %config.data_dir.display(), "opened stores");
    let session = PracticeSession::new(questions, history, config.session_config());
    Ok((config, session))
}
