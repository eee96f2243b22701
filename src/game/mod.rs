//! Gameplay: the state machine and the session that feeds it hints

mod input;
mod session;
mod state;

pub use input::KeyInput;
pub use session::Session;
pub use state::{Game, GameState, Transition};
