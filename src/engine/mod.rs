//! Guess engine: the game's core loop.
//!
//! ## Flow of one guess
//!
//! 1. `normalize`: raw input becomes a `GuessKey` (or is ignored)
//! 2. `matching`: every hidden card with that key, in display order
//! 3. `sequencer`: scroll/flip each match, one after another
//! 4. `win`: after each flip, schedule the win announcement if done
//! 5. `feedback`: flash hit/miss on the input field, restore focus
//!
//! ## Seams
//!
//! - `ViewStore`: the board, injected and shared
//! - `Renderer` / `GuessField`: the front end
//! - `Scheduler`: cancellable timers, one per board

pub mod feedback;
pub mod guess;
pub mod matching;
pub mod normalize;
pub mod renderer;
pub mod scheduler;
pub mod sequencer;
pub mod store;
pub mod win;

pub use feedback::Feedback;
pub use guess::{GuessEngine, GuessOutcome, KeyResponse};
pub use matching::{match_guess, Matches};
pub use normalize::{normalize_key, GuessKey, IdentityKey};
pub use renderer::{GuessField, Indicator, Renderer};
pub use scheduler::{spawn_named_task, Scheduler};
pub use sequencer::RevealSequencer;
pub use store::{Generation, Progress, Snapshot, ViewStore};
pub use win::WinDetector;
