//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    Action, App, Message, MessageStyle, Statistics, TuiSession, keyboard_summary, map_key, run_tui,
};
