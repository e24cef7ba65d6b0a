//! quizmark CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use quizmark_core::{AccuracyBand, QuizError};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "quizmark",
    version,
    about = "Free-text answer quiz with edit-distance scoring"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and example question set
    Init,

    /// Add a question
    Add {
        /// Question text
        #[arg(long)]
        prompt: String,

        /// Reference answer
        #[arg(long)]
        answer: String,
    },

    /// List stored questions
    List,

    /// Remove a question (its history is kept)
    Remove {
        /// Question id
        #[arg(long)]
        id: u32,
    },

    /// Import questions from a .toml question set or directory
    Import {
        /// Path to question set file or directory
        #[arg(long)]
        file: PathBuf,
    },

    /// Validate question set TOML files
    Validate {
        /// Path to question set file or directory
        #[arg(long)]
        file: PathBuf,
    },

    /// Answer one question and get it scored
    Ask {
        /// Question id (default: random)
        #[arg(long, conflicts_with = "random")]
        id: Option<u32>,

        /// Pick a random question
        #[arg(long)]
        random: bool,

        /// Answer text (read from stdin when omitted)
        #[arg(long)]
        answer: Option<String>,
    },

    /// Compare an answer with a reference without storing anything
    Score {
        /// Reference answer
        #[arg(long)]
        reference: String,

        /// Answer to score
        #[arg(long)]
        answer: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show attempts and averages per question
    History {
        /// Show the attempts of one question
        #[arg(long)]
        question: Option<u32>,

        /// Only show attempts (or question averages) in this band:
        /// excellent, good, fair or poor
        #[arg(long)]
        band: Option<AccuracyBand>,

        /// Also write the history as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,
    },

    /// Re-render a stored attempt
    Review {
        /// Question id
        #[arg(long)]
        question: u32,

        /// Attempt number, 1 = oldest (default: latest)
        #[arg(long)]
        attempt: Option<usize>,

        /// Write the review as an HTML page
        #[arg(long)]
        html: Option<PathBuf>,

        /// Print the review as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete one attempt from the history
    Delete {
        /// Question id
        #[arg(long)]
        question: u32,

        /// Attempt number, 1 = oldest
        #[arg(long)]
        attempt: usize,
    },

    /// Delete the whole history
    ClearHistory {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizmark=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Add { prompt, answer } => commands::add::execute(&prompt, &answer, config),
        Commands::List => commands::list::execute(config),
        Commands::Remove { id } => commands::remove::execute(id, config),
        Commands::Import { file } => commands::import::execute(file, config),
        Commands::Validate { file } => commands::validate::execute(file, config),
        Commands::Ask { id, random, answer } => commands::ask::execute(id, random, answer, config),
        Commands::Score {
            reference,
            answer,
            json,
        } => commands::score::execute(&reference, &answer, json),
        Commands::History {
            question,
            band,
            html,
        } => commands::history::execute(question, band, html, config),
        Commands::Review {
            question,
            attempt,
            html,
            json,
        } => commands::review::execute(question, attempt, html, json, config),
        Commands::Delete { question, attempt } => {
            commands::delete::execute(question, attempt, config)
        }
        Commands::ClearHistory { yes } => commands::clear_history::execute(yes, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<QuizError>().is_some_and(QuizError::is_user_input) {
            eprintln!("Nothing was saved.");
        }
        process::exit(1);
    }
}
