//! Terminal rendering of scored answers.

use comfy_table::{Cell, Color, Table};

use quizmark_core::align::Alignment;
use quizmark_core::classify::{AccuracyBand, Classification};
use quizmark_core::scoring::ScoreBreakdown;
use quizmark_core::session::Review;

/// Table color for a band.
pub fn band_color(band: AccuracyBand) -> Color {
    match band {
        AccuracyBand::Excellent => Color::Green,
        AccuracyBand::Good => Color::Blue,
        AccuracyBand::Fair => Color::Yellow,
        AccuracyBand::Poor => Color::Red,
    }
}

/// A percentage cell colored by the band it falls in.
pub fn accuracy_cell(accuracy: f64) -> Cell {
    Cell::new(format!("{accuracy:.1}%")).fg(band_color(AccuracyBand::from_score(accuracy)))
}

/// Marker line to print under the typed answer: `^` below every unmatched
/// character. Tabs are copied so the markers stay in column.
pub fn marker_line(alignment: &Alignment) -> String {
    let line: String = alignment
        .chars()
        .map(|(c, matched)| match (c, matched) {
            ('\t', _) => '\t',
            (_, true) => ' ',
            (_, false) => '^',
        })
        .collect();
    line.trim_end().to_string()
}

/// Print a stored attempt with its question.
pub fn print_review(review: &Review) {
    println!("Question #{}: {}", review.question.id, review.question.prompt);
    print_comparison(
        &review.result.user_answer,
        &review.question.reference_answer,
        &review.breakdown,
        &review.alignment,
        &review.classification,
        review.result.accuracy,
    );
}

/// Print a typed answer against its reference with highlights and score.
pub fn print_comparison(
    user_answer: &str,
    reference_answer: &str,
    breakdown: &ScoreBreakdown,
    alignment: &Alignment,
    classification: &Classification,
    accuracy: f64,
) {
    println!();
    println!("  Your answer: {user_answer}");
    let markers = marker_line(alignment);
    if !markers.is_empty() {
        println!("               {markers}");
    }
    println!("  Reference:   {reference_answer}");
    println!();

    let mut table = Table::new();
    table.set_header(vec!["Accuracy", "Band", "Edit distance", "Matched"]);
    table.add_row(vec![
        accuracy_cell(accuracy),
        Cell::new(classification.band).fg(band_color(classification.band)),
        Cell::new(format!("{}/{}", breakdown.distance, breakdown.max_len)),
        Cell::new(format!("{}/{}", alignment.matched_count(), alignment.len())),
    ]);
    println!("{table}");
    println!("{}", classification.feedback);
}
