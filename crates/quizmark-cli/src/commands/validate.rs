//! The `quizmark validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizmark_core::parser::{load_question_sets, validate_question_set};

pub fn execute(path: PathBuf, config_path: Option<&Path>) -> Result<()> {
    let config = quizmark_store::load_config_from(config_path)?;
    let sets = load_question_sets(&path)?;

    let mut total_warnings = 0;

    for set in &sets {
        println!("Question set: {} ({} questions)", set.name, set.questions.len());

        let warnings = validate_question_set(set, config.max_questions);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [#{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All question sets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
