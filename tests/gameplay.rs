//! Full games played through the public API

use std::sync::Arc;

use async_trait::async_trait;
use hintle::core::{COLS, GuessResult, ROWS, Word};
use hintle::game::{Game, GameState, KeyInput, Session, Transition};
use hintle::hints::{HINTS_UNAVAILABLE, HintError, Offline, RelatedWord, RelatedWords};
use hintle::wordlists::{FixedAnswer, WordList};

use GuessResult::{Correct as G, Incorrect as X, Misplaced as Y};

fn game(answer: &str) -> Game<WordList, FixedAnswer> {
    Game::new(
        WordList::embedded(),
        FixedAnswer(Word::new(answer).unwrap()),
    )
}

fn play<V, A>(game: &mut Game<V, A>, word: &str) -> Transition
where
    V: hintle::wordlists::WordValidator,
    A: hintle::wordlists::AnswerSource,
{
    let mut last = Transition::Ignored;
    for ch in word.chars() {
        last = game.handle_key(KeyInput::from(ch));
    }
    last
}

fn grades<V, A>(game: &Game<V, A>, row: usize) -> Vec<GuessResult>
where
    V: hintle::wordlists::WordValidator,
    A: hintle::wordlists::AnswerSource,
{
    game.board()
        .row(row)
        .unwrap()
        .iter()
        .map(|cell| cell.result.unwrap())
        .collect()
}

#[test]
fn grading_scenarios() {
    let cases = [
        ("right", "rings", [G, G, X, Y, X]),
        ("close", "cheer", [G, X, Y, X, X]),
        ("emcee", "eerie", [G, Y, X, X, G]),
    ];
    for (answer, guess, expected) in cases {
        let mut game = game(answer);
        assert_eq!(play(&mut game, guess), Transition::Advanced, "{guess}");
        assert_eq!(grades(&game, 0), expected, "{guess} vs {answer}");
    }
}

#[test]
fn win_on_third_row() {
    let mut game = game("slate");
    assert_eq!(play(&mut game, "crane"), Transition::Advanced);
    assert_eq!(play(&mut game, "robot"), Transition::Advanced);
    assert_eq!(play(&mut game, "slate"), Transition::Won);

    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.turn(), 2);
    assert_eq!(grades(&game, 2), [G; COLS]);
    assert!(game.board().row(3).unwrap().iter().all(|c| c.is_empty()));
}

#[test]
fn loss_after_every_row() {
    let mut game = game("slate");
    let guesses = ["crane", "robot", "floor", "cheer", "crack", "leave"];
    assert_eq!(guesses.len(), ROWS);

    for guess in &guesses[..ROWS - 1] {
        assert_eq!(play(&mut game, guess), Transition::Advanced);
    }
    assert_eq!(play(&mut game, guesses[ROWS - 1]), Transition::Lost);
    assert_eq!(game.state(), GameState::Lost);
    assert_eq!(game.answer().text(), "SLATE");

    assert_eq!(play(&mut game, "slate"), Transition::Ignored);
}

#[test]
fn fix_rejected_word_then_win() {
    let mut game = game("crane");
    assert_eq!(play(&mut game, "cranx"), Transition::Rejected);
    assert_eq!(game.turn(), 0);

    assert_eq!(game.handle_key(KeyInput::Delete), Transition::Edited);
    assert_eq!(play(&mut game, "e"), Transition::Won);
}

#[test]
fn new_game_after_loss_resets_board() {
    let mut game = game("slate");
    for guess in ["crane", "robot", "floor", "cheer", "crack", "leave"] {
        play(&mut game, guess);
    }
    game.new_game();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!((game.turn(), game.active_square()), (0, 0));
    assert!(game.board().rows().flatten().all(|c| c.is_empty()));
}

struct Thesaurus;

#[async_trait]
impl RelatedWords for Thesaurus {
    async fn related_words(&self, answer: &str) -> Result<Vec<RelatedWord>, HintError> {
        let words: &[&str] = match answer.to_ascii_lowercase().as_str() {
            "slate" => &["slates", "tablet", "chalk", "board", "rock", "grey"],
            _ => &["unrelated"],
        };
        Ok(words
            .iter()
            .map(|w| RelatedWord {
                word: (*w).to_string(),
                score: 1.0,
            })
            .collect())
    }
}

#[tokio::test]
async fn hints_unlock_one_per_turn() {
    let mut session = Session::new(game("slate"), Arc::new(Thesaurus));
    assert!(session.wait_for_hints().await);
    assert_eq!(session.game().revealed_hints(), ["CHALK"]);

    for ch in "crane".chars() {
        session.handle_key(KeyInput::from(ch));
    }
    assert_eq!(session.game().revealed_hints(), ["CHALK", "BOARD"]);

    for ch in "robot".chars() {
        session.handle_key(KeyInput::from(ch));
    }
    assert_eq!(
        session.game().revealed_hints(),
        ["CHALK", "BOARD", "ROCK"]
    );
}

#[tokio::test]
async fn offline_games_show_sentinel() {
    let mut session = Session::new(game("slate"), Arc::new(Offline));
    session.wait_for_hints().await;
    assert_eq!(session.game().revealed_hints(), [HINTS_UNAVAILABLE]);
}
