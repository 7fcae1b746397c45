//! Terminal front end for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **Config / CLI**: TOML settings and clap arguments
//! - **Input**: pure mapping from key presses to [`UiEvent`]s
//! - **App**: owns the single [`GameState`](rewind_tictactoe::GameState)
//!   and turns UI events into game intents
//! - **UI**: stateless ratatui drawing of a [`GameView`](rewind_tictactoe::GameView)
//! - **Replay**: headless play-through for scripts and tests

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod replay;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use input::{CursorMove, Panel, UiEvent, key_to_ui_event, move_cursor};
pub use replay::{ReplayError, render_text, replay};
pub use terminal::run_tui;
pub use ui::draw;
