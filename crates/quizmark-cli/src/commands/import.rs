//! The `quizmark import` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizmark_core::parser::load_question_sets;
use quizmark_core::QuizError;

pub fn execute(path: PathBuf, config_path: Option<&Path>) -> Result<()> {
    let (config, session) = super::open_session(config_path)?;
    let sets = load_question_sets(&path)?;

    let entries: Vec<_> = sets.iter().flat_map(|s| s.questions.iter()).collect();
    let mut imported = 0;
    let mut skipped = 0;

    for (idx, entry) in entries.iter().enumerate() {
        match session.add_question(&entry.prompt, &entry.answer) {
            Ok(q) => {
                println!("  #{} {}", q.id, q.prompt);
                imported += 1;
            }
            Err(e) => match e.downcast_ref::<QuizError>() {
                Some(QuizError::QuestionLimitReached { limit }) => {
                    let remaining = entries.len() - idx;
                    println!(
                        "Question limit of {limit} reached, {remaining} question(s) not imported."
                    );
                    break;
                }
                Some(QuizError::EmptyQuestion) => {
                    tracing::warn!(position = idx + 1, "skipping question with empty prompt or answer");
                    skipped += 1;
                }
                _ => return Err(e),
            },
        }
    }

    println!(
        "Imported {imported} question(s) from {} set(s); {}/{} stored.",
        sets.len(),
        session.questions()?.len(),
        config.max_questions
    );
    if skipped > 0 {
        println!("Skipped {skipped} empty question(s).");
    }
    Ok(())
}
