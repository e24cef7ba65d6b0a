//! The `quizmark clear-history` command.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;

pub fn execute(yes: bool, config_path: Option<&Path>) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;

    let count = session.history()?.len();
    if count == 0 {
        println!("History is already empty.");
        return Ok(());
    }

    if !yes && !confirm(&format!("Delete all {count} recorded attempt(s)?"))? {
        println!("Aborted, nothing deleted.");
        return Ok(());
    }

    let removed = session.clear_history()?;
    println!("Deleted {removed} attempt(s).");
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
