//! The `quizmark delete` command.

use std::path::Path;

use anyhow::Result;

pub fn execute(question_id: u32, attempt: usize, config_path: Option<&Path>) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;
    session.delete_attempt(question_id, attempt)?;
    println!("Deleted attempt #{attempt} of question #{question_id}.");
    Ok(())
}
