//! The `quizmark review` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizmark_report::write_review_report;

use crate::render::print_review;

pub fn execute(
    question_id: u32,
    attempt: Option<usize>,
    html: Option<PathBuf>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;
    let review = session.review_attempt(question_id, attempt)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&review)?);
    } else {
        print_review(&review);
    }

    if let Some(path) = html {
        write_review_report(&review, &path)?;
        eprintln!("HTML review written to {}", path.display());
    }

    Ok(())
}
