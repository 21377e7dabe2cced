//! Core types: configuration and errors.
//!
//! Nothing here knows about cards or the engine. Games are tuned via
//! `RecallConfig` rather than by changing code.

pub mod config;
pub mod error;

pub use config::{
    EngineConfig, IngestConfig, RecallConfig, SetMapping, Timings, ViewConfig,
    DEFAULT_CATALOG_PATH, DEFAULT_IMAGE_URL_TEMPLATE, DEFAULT_SOURCE_URL,
};
pub use error::{RecallError, Result};
