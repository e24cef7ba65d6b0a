//! The `quizmark history` command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Table};

use quizmark_core::classify::AccuracyBand;
use quizmark_core::statistics::{summarize_history, summarize_question_stats, QuestionStats};
use quizmark_core::QuizResult;
use quizmark_report::write_history_report;

use crate::render::{accuracy_cell, band_color};

pub fn execute(
    question_id: Option<u32>,
    band: Option<AccuracyBand>,
    html: Option<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let (_, session) = super::open_session(config_path)?;
    let all = session.statistics()?;
    // A question is in a band when its average is; unattempted ones are in none
    let stats: Vec<QuestionStats> = match band {
        Some(band) => all
            .iter()
            .filter(|s| s.attempts > 0 && AccuracyBand::from_score(s.average_accuracy) == band)
            .cloned()
            .collect(),
        None => all.clone(),
    };

    match question_id {
        Some(id) => {
            let question = session.question(id)?;
            match all.iter().find(|s| s.question_id == id) {
                Some(s) if s.attempts > 0 => print_attempts(s, band),
                _ => println!("No attempts for question #{}: {}", id, question.prompt),
            }
        }
        None => print_overview(&stats, band),
    }

    if let Some(path) = html {
        write_history_report(&stats, &path)?;
        eprintln!("HTML history written to {}", path.display());
    }

    Ok(())
}

fn print_overview(stats: &[QuestionStats], band: Option<AccuracyBand>) {
    if stats.is_empty() {
        match band {
            Some(band) => println!("No questions with a {band} average."),
            None => println!("No questions yet."),
        }
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Attempts", "Average", "Best"]);
    for s in stats {
        let (average, best) = match s.best_accuracy {
            Some(best) => (accuracy_cell(s.average_accuracy), accuracy_cell(best)),
            None => (Cell::new("-"), Cell::new("-")),
        };
        table.add_row(vec![
            Cell::new(s.question_id),
            Cell::new(&s.prompt),
            Cell::new(s.attempts),
            average,
            best,
        ]);
    }
    println!("{table}");

    let summary = summarize_question_stats(stats);
    println!(
        "{} attempt(s), average {:.1}%",
        summary.total_attempts, summary.average_accuracy
    );
    let bands: Vec<String> = AccuracyBand::ALL
        .iter()
        .map(|b| format!("{b}: {}", summary.per_band.get(b).copied().unwrap_or(0)))
        .collect();
    println!("{}", bands.join(", "));
}

fn print_attempts(stats: &QuestionStats, band: Option<AccuracyBand>) {
    println!("Question #{}: {}", stats.question_id, stats.prompt);

    // Attempt numbers stay those of the full history
    let shown: Vec<(usize, &QuizResult)> = stats
        .results
        .iter()
        .enumerate()
        .filter(|(_, r)| band.map_or(true, |b| AccuracyBand::from_score(r.accuracy) == b))
        .collect();
    if shown.is_empty() {
        if let Some(band) = band {
            println!("No {band} attempts.");
        }
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Attempt", "When", "Accuracy", "Band", "Answer"]);
    for (idx, r) in &shown {
        let band = AccuracyBand::from_score(r.accuracy);
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(r.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M")),
            accuracy_cell(r.accuracy),
            Cell::new(band).fg(band_color(band)),
            Cell::new(&r.user_answer),
        ]);
    }
    println!("{table}");

    let results: Vec<QuizResult> = shown.into_iter().map(|(_, r)| r.clone()).collect();
    let summary = summarize_history(&results);
    println!(
        "{} attempt(s), average {:.1}%",
        summary.total_attempts, summary.average_accuracy
    );
}
