//! Board construction.
//!
//! ## Key Types
//!
//! - `ViewRequest`: rarity selections from the player
//! - `BuiltView`: cards grouped by set, ready for the engine
//! - `ViewState`: whether the board has cards, and why not

pub mod builder;

pub use builder::{build_view, BuiltView, CatalogSet, RarityFilter, ViewRequest, ViewState};
