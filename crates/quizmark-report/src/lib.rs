//! quizmark-report: HTML rendering for quizmark.
//!
//! Turns a [`Review`](quizmark_core::session::Review) into a page with the
//! typed answer highlighted character by character, and the answer history
//! into a summary page. Both pages are single files with the CSS inlined.

pub mod html;

pub use html::{generate_history_html, generate_review_html, write_history_report, write_review_report};
