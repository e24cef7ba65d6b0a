//! The `quizmark list` command.

use std::path::Path;

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let (config, session) = super::open_session(config_path)?;
    let questions = session.questions()?;

    if questions.is_empty() {
        println!("No questions yet. Add one with `quizmark add` or `quizmark import`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Reference answer"]);
    for q in &questions {
        table.add_row(vec![
            Cell::new(q.id),
            Cell::new(&q.prompt),
            Cell::new(&q.reference_answer),
        ]);
    }

    println!("{table}");
    println!("{}/{} questions stored.", questions.len(), config.max_questions);
    Ok(())
}
