//! Terminal front end.
//!
//! Implements the engine's `Renderer` and `GuessField` on top of a plain
//! text stream, so the game can be played from a shell.
//!
//! ## Key Types
//!
//! - `BoardLayout`: rows of cards, one set per run of rows
//! - `TerminalRenderer`: scroll window, flips, win banner
//! - `TerminalField`: typed guesses and the hit/miss indicator
//! - `Output`: the stream both write to

pub mod board;
pub mod layout;
pub mod output;
pub mod renderer;

pub use board::write_board;
pub use layout::{BoardLayout, BoardRow};
pub use output::Output;
pub use renderer::{TerminalField, TerminalRenderer};
