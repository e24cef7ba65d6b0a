//! The `quizmark ask` command.

use std::io::{BufRead, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};

use quizmark_core::session::PracticeMode;

use crate::render::print_review;

pub fn execute(
    id: Option<u32>,
    random: bool,
    answer: Option<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;

    let mode = match id {
        Some(id) if !random => PracticeMode::Select(id),
        _ => PracticeMode::Random,
    };
    let question = session.pick_question(mode, &mut rand::thread_rng())?;

    let answer = match answer {
        Some(answer) => answer,
        None => {
            println!("Question #{}: {}", question.id, question.prompt);
            read_answer()?
        }
    };

    let review = session.submit_and_review(question.id, &answer)?;
    print_review(&review);
    Ok(())
}

/// Read one line of answer from stdin, prompting when interactive.
fn read_answer() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        print!("> ");
        std::io::stdout().flush()?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read answer from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
