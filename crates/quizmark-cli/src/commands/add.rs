//! The `quizmark add` command.

use std::path::Path;

use anyhow::Result;

pub fn execute(prompt: &str, answer: &str, config_path: Option<&Path>) -> Result<()> {
    let (config, session) = super::open_session(config_path)?;
    let question = session.add_question(prompt.trim(), answer.trim())?;

    let count = session.questions()?.len();
    println!("Added question #{}: {}", question.id, question.prompt);
    println!("{count}/{} questions stored.", config.max_questions);
    Ok(())
}
