//! # card-recall
//!
//! A card memory game: the board shows a collection of cards face down,
//! and the player reveals them by typing their names.
//!
//! ## Design Principles
//!
//! 1. **Front-End Agnostic**: The engine talks to the screen only through
//!    the `Renderer` and `GuessField` traits. The terminal front end and
//!    the test recorders are interchangeable.
//!
//! 2. **One Board, One Generation**: Every view load builds a fresh board.
//!    Timers belong to the board that started them and die with it.
//!
//! 3. **Configuration Over Convention**: Timings, set order, and the set
//!    code table come from `RecallConfig`.
//!
//! ## Architecture
//!
//! - **Shared Store**: Views live in an `im::Vector` behind a lock, so
//!   snapshots are cheap and concurrent guesses never reveal a card twice.
//!
//! - **Cancellable Time**: Every wait goes through the board's `Scheduler`,
//!   which is a Tokio timer plus a cancellation token.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `cards`: Card records, the catalog, board views
//! - `ingest`: Building the catalog from upstream card data
//! - `view`: Rarity filtering and grouping by set
//! - `engine`: Guess matching, reveal sequencing, feedback, win detection
//! - `terminal`: Text front end
//! - `testing`: Recording front end for tests

pub mod cards;
pub mod core;
pub mod engine;
pub mod ingest;
pub mod terminal;
pub mod testing;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    EngineConfig, IngestConfig, RecallConfig, RecallError, Result, SetMapping, Timings,
    ViewConfig,
};

pub use crate::cards::{CardRecord, CardView, Catalog, Rarity, ViewId};

pub use crate::engine::{
    GuessEngine, GuessField, GuessKey, GuessOutcome, IdentityKey, Indicator, KeyResponse,
    Progress, Renderer, ViewStore,
};

pub use crate::ingest::{CardSource, IngestReport};

pub use crate::view::{build_view, BuiltView, ViewRequest, ViewState};
