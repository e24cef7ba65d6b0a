//! The `quizmark remove` command.

use std::path::Path;

use anyhow::Result;

pub fn execute(id: u32, config_path: Option<&Path>) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;
    session.remove_question(id)?;
    println!("Removed question #{id}. Its past attempts stay in the history.");
    Ok(())
}
