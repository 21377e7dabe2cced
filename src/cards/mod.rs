//! Card system: catalog records, the catalog, and board views.
//!
//! ## Key Types
//!
//! - `CardRecord`: Static card data as stored in the catalog file
//! - `Rarity`: Card rarity, parsed case-insensitively
//! - `Catalog`: Ordered list of records, loaded from / saved to JSON
//! - `CardView`: One face-down card on the board
//! - `ViewId`: Position of a view in display order

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardRecord, Rarity, UnknownRarity};
pub use instance::{CardView, ViewId};
pub use registry::Catalog;
