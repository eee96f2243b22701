//! Hintle - CLI
//!
//! Play in a TUI, in a line-based terminal mode, or grade a single guess.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hintle::{
    commands::{grade_words, run_simple},
    config::Config,
    game::{Game, Session},
    hints::DATAMUSE_URL,
    interactive::{App, TuiSession, run_tui},
    logging::{self, LogTarget},
    output::print_grade_result,
};

#[derive(Parser)]
#[command(
    name = "hintle",
    about = "Guess the five-letter word, with a related-word hint every turn",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play against a fixed answer instead of a random one
    #[arg(long, global = true, env = "HINTLE_ANSWER")]
    answer: Option<String>,

    /// Do not contact the related-words service
    #[arg(long, global = true)]
    offline: bool,

    /// Base URL of the Datamuse-compatible related-words service
    #[arg(long, global = true, env = "HINTLE_HINT_URL", default_value = DATAMUSE_URL)]
    hint_url: String,

    /// Extra accepted guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Write logs to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without TUI
    Simple,

    /// Grade one guess against an answer
    Grade {
        /// The guessed word
        guess: String,

        /// The answer to grade against
        answer: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    let log_target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(&log_target).context("Failed to open log file")?;

    match command {
        Commands::Grade { guess, answer } => {
            let result = grade_words(&guess, &answer)?;
            print_grade_result(&result);
            Ok(())
        }
        Commands::Simple => run_simple(new_session(&cli)?).await,
        Commands::Play => run_tui(App::new(new_session(&cli)?)),
    }
}

fn new_session(cli: &Cli) -> Result<TuiSession> {
    let config = Config::new(
        cli.answer.as_deref(),
        cli.offline,
        cli.hint_url.as_str(),
        cli.wordlist.clone(),
    )?;
    let words = config.word_list()?;
    let answers = config.answer_source(Arc::new(words.clone()));
    Ok(Session::new(Game::new(words, answers), config.hint_service()?))
}
