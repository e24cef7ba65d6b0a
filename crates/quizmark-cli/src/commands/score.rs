//! The `quizmark score` command.

use anyhow::Result;

use quizmark_core::{align, classify, score};

use crate::render::print_comparison;

pub fn execute(reference: &str, answer: &str, json: bool) -> Result<()> {
    let breakdown = score(answer, reference);
    let alignment = align(answer, reference);
    let classification = classify(breakdown.accuracy);

    if json {
        let output = serde_json::json!({
            "accuracy": breakdown.accuracy,
            "distance": breakdown.distance,
            "max_len": breakdown.max_len,
            "band": classification.band,
            "feedback": classification.feedback,
            "spans": alignment.spans(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_comparison(
        answer,
        reference,
        &breakdown,
        &alignment,
        &classification,
        breakdown.accuracy,
    );
    Ok(())
}
