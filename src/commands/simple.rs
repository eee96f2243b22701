//! Simple line-based mode
//!
//! Each input line is a run of keystrokes: letters type and `<` deletes.
//! `new` and `quit` are whole-line commands.

use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::game::{KeyInput, Session, Transition};
use crate::output::{print_board, print_hints, print_loss, print_win};
use crate::wordlists::{AnswerSource, WordValidator};

/// How long to wait for the first hint before showing the board
const FIRST_HINT_WAIT: Duration = Duration::from_secs(2);

/// Key events for one line of input
pub fn keystrokes(line: &str) -> impl Iterator<Item = KeyInput> + '_ {
    line.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| if ch == '<' { KeyInput::Delete } else { KeyInput::from(ch) })
}

/// What a line of input asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand<'a> {
    Quit,
    NewGame,
    Keys(&'a str),
}

impl<'a> LineCommand<'a> {
    /// Interpret a trimmed, lowercased line
    ///
    /// `new` and `quit` always act as commands. The one-letter forms `n` and
    /// `q` only do so once the game is over; mid-game they are keystrokes.
    #[must_use]
    pub fn parse(line: &'a str, game_over: bool) -> Self {
        match line {
            "quit" | "exit" => Self::Quit,
            "new" => Self::NewGame,
            "q" if game_over => Self::Quit,
            "n" if game_over => Self::NewGame,
            keys => Self::Keys(keys),
        }
    }
}

/// Run the simple interactive mode until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub async fn run_simple<V: WordValidator, A: AnswerSource>(mut session: Session<V, A>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Hintle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type letters to fill the row; a full row is submitted.");
    println!("Use '<' to delete. Commands: 'new', 'quit'\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    wait_briefly(&mut session).await;

    loop {
        session.poll_hints();
        let game = session.game();
        let over = game.state().is_over();
        print_board(game.board(), (!over).then_some(game.turn()));
        print_hints(game.revealed_hints());

        let prompt = if over { "Play again? (n/q)" } else { "Keys" };
        stdout
            .write_all(format!("{prompt}: ").as_bytes())
            .await
            .context("Failed to write prompt")?;
        stdout.flush().await.context("Failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let line = line.trim().to_lowercase();
        match LineCommand::parse(&line, over) {
            LineCommand::Quit => break,
            LineCommand::NewGame => {
                session.new_game();
                println!("\n🔄 New game started!\n");
                wait_briefly(&mut session).await;
            }
            LineCommand::Keys(keys) => play_line(&mut session, keys),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn play_line<V: WordValidator, A: AnswerSource>(session: &mut Session<V, A>, line: &str) {
    for key in keystrokes(line) {
        let transition = session.handle_key(key);
        debug!(?key, ?transition, "Key handled");
        let game = session.game();
        match transition {
            Transition::Rejected => {
                println!("{}", "❌ Not in word list. Use '<' to fix it.".red());
            }
            Transition::Won => {
                print_win(game.turn() + 1, game.board().rows());
                return;
            }
            Transition::Lost => {
                print_loss(game.answer().text());
                return;
            }
            Transition::Ignored | Transition::Edited | Transition::Advanced => {}
        }
    }
}

async fn wait_briefly<V: WordValidator, A: AnswerSource>(session: &mut Session<V, A>) {
    if tokio::time::timeout(FIRST_HINT_WAIT, session.wait_for_hints())
        .await
        .is_err()
    {
        debug!("First hint still pending");
    }
}
