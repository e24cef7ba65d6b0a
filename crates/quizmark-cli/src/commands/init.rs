//! The `quizmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizmark.toml
    if std::path::Path::new("quizmark.toml").exists() {
        println!("quizmark.toml already exists, skipping.");
    } else {
        std::fs::write("quizmark.toml", SAMPLE_CONFIG)?;
        println!("Created quizmark.toml");
    }

    // Create example question set
    std::fs::create_dir_all("questions")?;
    let example_path = std::path::Path::new("questions/example.toml");
    if example_path.exists() {
        println!("questions/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUESTION_SET)?;
        println!("Created questions/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: quizmark validate --file questions/example.toml");
    println!("  2. Run: quizmark import --file questions/example.toml");
    println!("  3. Run: quizmark ask --random");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizmark configuration

# Where questions.json and history.json live, relative to this file.
# QUIZMARK_DATA_DIR overrides it.
data_dir = "quizmark-data"
questions_file = "questions.json"
history_file = "history.json"

# Maximum number of stored questions
max_questions = 9
"#;

const EXAMPLE_QUESTION_SET: &str = r#"[question_set]
name = "Example Questions"
description = "A few questions to get started"

[[questions]]
prompt = "What is the capital of France?"
answer = "Paris"

[[questions]]
prompt = "Which planet is known as the Red Planet?"
answer = "Mars"

[[questions]]
prompt = "What does a Rust value's owner do when it goes out of scope?"
answer = """
It drops the value and frees its resources.
"""
"#;
