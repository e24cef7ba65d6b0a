//! HTML report generator.
//!
//! Produces self-contained HTML files with all CSS inlined.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use quizmark_core::classify::AccuracyBand;
use quizmark_core::session::Review;
use quizmark_core::statistics::{summarize_question_stats, QuestionStats};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn push_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

/// Generate the page for one reviewed attempt.
///
/// Each character of the typed answer is wrapped in a `match` or `miss`
/// span according to the alignment mask.
pub fn generate_review_html(review: &Review) -> String {
    let mut html = String::new();
    push_head(
        &mut html,
        &format!("quizmark review: {}", review.question.prompt),
    );

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>quizmark review</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Question #{} | answered {}</p>\n",
        review.question.id,
        review.result.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str(&format!(
        "<p class=\"prompt\">{}</p>\n",
        html_escape(&review.question.prompt)
    ));
    html.push_str("</header>\n");

    // Score
    let band = review.classification.band;
    html.push_str("<section class=\"score\">\n");
    html.push_str(&format!(
        "<p class=\"accuracy band-{band}\">{:.1}%</p>\n",
        review.result.accuracy
    ));
    html.push_str(&format!(
        "<p class=\"feedback band-{band}\">{}</p>\n",
        html_escape(review.classification.feedback)
    ));
    html.push_str("</section>\n");

    // Answers
    html.push_str("<section class=\"answers\">\n");
    html.push_str("<h2>Your answer</h2>\n");
    html.push_str("<p class=\"answer\">");
    for span in review.alignment.spans() {
        let class = if span.matched { "match" } else { "miss" };
        html.push_str(&format!(
            "<span class=\"{class}\">{}</span>",
            html_escape(&span.text)
        ));
    }
    html.push_str("</p>\n");
    html.push_str("<h2>Reference answer</h2>\n");
    html.push_str(&format!(
        "<p class=\"answer reference\">{}</p>\n",
        html_escape(&review.question.reference_answer)
    ));
    html.push_str("</section>\n");

    // Breakdown
    html.push_str("<section class=\"breakdown\">\n");
    html.push_str("<table>\n<tbody>\n");
    html.push_str(&format!(
        "<tr><th>Edit distance</th><td>{}</td></tr>\n",
        review.breakdown.distance
    ));
    html.push_str(&format!(
        "<tr><th>Longer answer</th><td>{} characters</td></tr>\n",
        review.breakdown.max_len
    ));
    html.push_str(&format!(
        "<tr><th>Matched characters</th><td>{}/{}</td></tr>\n",
        review.alignment.matched_count(),
        review.alignment.len()
    ));
    html.push_str(&format!("<tr><th>Band</th><td>{band}</td></tr>\n"));
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(&html_escape(
        &serde_json::to_string_pretty(review).unwrap_or_default(),
    ));
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Generate the history page: per-question attempts and the band
/// distribution over the attempts of the listed questions.
pub fn generate_history_html(stats: &[QuestionStats]) -> String {
    let summary = summarize_question_stats(stats);
    let mut html = String::new();
    push_head(&mut html, "quizmark history");

    html.push_str("<header>\n");
    html.push_str("<h1>quizmark history</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} questions | {} attempts | average {:.1}% | generated {}</p>\n",
        stats.len(),
        summary.total_attempts,
        summary.average_accuracy,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Bands</h2>\n");
    html.push_str(&generate_band_chart(&summary.per_band, summary.total_attempts));
    html.push_str("</section>\n");

    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Questions</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str(
        "<thead><tr><th>#</th><th>Question</th><th>Attempts</th><th>Average</th><th>Best</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");
    for q in stats {
        let best = q
            .best_accuracy
            .map(|b| format!("{b:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        let class = match q.best_accuracy {
            Some(_) => format!("band-{}", AccuracyBand::from_score(q.average_accuracy)),
            None => "unattempted".to_string(),
        };
        html.push_str(&format!(
            "<tr class=\"{class}\"><td>{}</td><td>{}</td><td>{}</td><td>{:.1}%</td><td>{best}</td></tr>\n",
            q.question_id,
            html_escape(&q.prompt),
            q.attempts,
            q.average_accuracy,
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Attempts per question, oldest first
    html.push_str("<section class=\"attempts\">\n");
    for q in stats.iter().filter(|q| q.attempts > 0) {
        html.push_str(&format!(
            "<details>\n<summary>#{} {}</summary>\n<ol>\n",
            q.question_id,
            html_escape(&q.prompt)
        ));
        for r in &q.results {
            html.push_str(&format!(
                "<li><span class=\"band-{}\">{:.1}%</span> {} <code>{}</code></li>\n",
                AccuracyBand::from_score(r.accuracy),
                r.accuracy,
                r.timestamp.format("%Y-%m-%d %H:%M"),
                html_escape(&r.user_answer)
            ));
        }
        html.push_str("</ol>\n</details>\n");
    }
    html.push_str("</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write a review page to a file.
pub fn write_review_report(review: &Review, path: &Path) -> Result<()> {
    write_page(&generate_review_html(review), path)
}

/// Write a history page to a file.
pub fn write_history_report(stats: &[QuestionStats], path: &Path) -> Result<()> {
    write_page(&generate_history_html(stats), path)
}

fn write_page(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write report: {}", path.display()))?;
    Ok(())
}

fn generate_band_chart(per_band: &BTreeMap<AccuracyBand, usize>, total: usize) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 120;

    let total_height = AccuracyBand::ALL.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, band) in AccuracyBand::ALL.iter().enumerate() {
        let count = per_band.get(band).copied().unwrap_or(0);
        let share = if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        };
        let y = i * (bar_height + padding) + padding;
        let width = (share * max_width as f64) as usize;

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            band
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width,
            y,
            width,
            bar_height,
            band_fill(*band)
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

fn band_fill(band: AccuracyBand) -> &'static str {
    match band.color() {
        "green" => "#22c55e",
        "blue" => "#3b82f6",
        "yellow" => "#eab308",
        _ => "#ef4444",
    }
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --match: #dcfce7; --miss: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --match: #064e3b; --miss: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
.prompt { font-size: 1.25rem; font-weight: bold; }
.accuracy { font-size: 2.5rem; font-weight: bold; margin: 0.5rem 0; }
.feedback { font-size: 1.25rem; }
.answer { font-family: 'JetBrains Mono', 'Fira Code', monospace; white-space: pre-wrap; padding: 1rem; border: 1px solid var(--border); border-radius: 8px; }
.match { background: var(--match); }
.miss { background: var(--miss); text-decoration: underline wavy #ef4444; }
.band-excellent { color: #16a34a; }
.band-good { color: #2563eb; }
.band-fair { color: #ca8a04; }
.band-poor { color: #dc2626; }
.unattempted { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use quizmark_core::model::{Question, QuizResult};
    use quizmark_core::statistics::compute_question_stats;

    fn make_review(answer: &str) -> Review {
        let question = Question::new(1, "Which animal says <meow>?", "cat");
        let result = QuizResult::new(1, answer, quizmark_core::accuracy(answer, "cat"));
        Review::build(&question, &result)
    }

    #[test]
    fn review_page_highlights_spans() {
        let html = generate_review_html(&make_review("bat"));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("<span class=\"miss\">b</span><span class=\"match\">at</span>"));
        assert!(html.contains("66.7%"));
        assert!(html.contains("band-fair"));
        assert!(html.contains("Which animal says &lt;meow&gt;?"));
        assert!(!html.contains("<meow>"));
    }

    #[test]
    fn review_page_escapes_typed_answer() {
        let html = generate_review_html(&make_review("<script>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;"));
    }

    #[test]
    fn history_page_lists_questions_and_attempts() {
        let questions = vec![
            Question::new(1, "Capital of France?", "Paris"),
            Question::new(2, "Never asked", "-"),
        ];
        let history = vec![
            QuizResult::new(1, "Pari", 80.0),
            QuizResult::new(1, "Paris", 100.0),
        ];
        let stats = compute_question_stats(&questions, &history);
        let html = generate_history_html(&stats);

        assert!(html.contains("2 questions | 2 attempts | average 90.0%"));
        assert!(html.contains("Capital of France?"));
        assert!(html.contains("class=\"unattempted\""));
        assert!(html.contains("<code>Pari</code>"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn history_page_counts_only_listed_questions() {
        let questions = vec![Question::new(1, "Capital of France?", "Paris")];
        let history = vec![
            QuizResult::new(1, "Paris", 100.0),
            QuizResult::new(3, "gone", 10.0),
        ];
        let stats = compute_question_stats(&questions, &history);
        let html = generate_history_html(&stats);

        assert!(html.contains("1 questions | 1 attempts | average 100.0%"));
        assert!(!html.contains("gone"));
    }

    #[test]
    fn empty_history_page_renders() {
        let html = generate_history_html(&[]);
        assert!(html.contains("0 questions | 0 attempts"));
        assert!(html.contains("width=\"0\""));
    }

    #[test]
    fn review_report_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/review.html");

        write_review_report(&make_review("cat"), &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<span class=\"match\">cat</span>"));
    }
}
