//! Configuration types.
//!
//! Everything the game needs at startup lives in `RecallConfig`:
//! - `EngineConfig`: submit key and the reveal/feedback timings
//! - `ViewConfig`: display order of card sets
//! - `IngestConfig`: card data source, image URLs, set code table
//!
//! Every field has a default, so a partial JSON file (or none at all) is a
//! valid configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{RecallError, Result};

const LOG_TARGET: &str = "card_recall::config";

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "cards_data.json";

/// Default collectible card dump.
pub const DEFAULT_SOURCE_URL: &str =
    "https://api.hearthstonejson.com/v1/latest/enUS/cards.collectible.json";

/// Default card render URL. `{id}` is replaced by the card id.
pub const DEFAULT_IMAGE_URL_TEMPLATE: &str =
    "https://art.hearthstonejson.com/v1/render/latest/enUS/256x/{id}.png";

/// Timed waits used by the guess engine, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Pause before flipping a card that is already on screen.
    pub visible_flip_delay_ms: u64,

    /// Time allowed for a smooth scroll to settle before flipping.
    pub scroll_settle_ms: u64,

    /// Gap between consecutive reveals of one guess.
    pub reveal_stagger_ms: u64,

    /// How long the hit/miss indicator stays before reverting.
    pub feedback_revert_ms: u64,

    /// Delay between the final flip and the win announcement.
    pub win_delay_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            visible_flip_delay_ms: 100,
            scroll_settle_ms: 1300,
            reveal_stagger_ms: 200,
            feedback_revert_ms: 1000,
            win_delay_ms: 1000,
        }
    }
}

impl Timings {
    /// All waits set to zero. Handy for scripted play.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            visible_flip_delay_ms: 0,
            scroll_settle_ms: 0,
            reveal_stagger_ms: 0,
            feedback_revert_ms: 0,
            win_delay_ms: 0,
        }
    }

    #[must_use]
    pub fn visible_flip_delay(&self) -> Duration {
        Duration::from_millis(self.visible_flip_delay_ms)
    }

    #[must_use]
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    #[must_use]
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    #[must_use]
    pub fn feedback_revert(&self) -> Duration {
        Duration::from_millis(self.feedback_revert_ms)
    }

    #[must_use]
    pub fn win_delay(&self) -> Duration {
        Duration::from_millis(self.win_delay_ms)
    }
}

/// Guess engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key name that submits a guess from the input field.
    pub submit_key: String,

    /// Timed waits.
    pub timings: Timings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            submit_key: "Enter".to_string(),
            timings: Timings::default(),
        }
    }
}

impl EngineConfig {
    /// Set the submit key.
    #[must_use]
    pub fn with_submit_key(mut self, key: impl Into<String>) -> Self {
        self.submit_key = key.into();
        self
    }

    /// Replace the timings.
    #[must_use]
    pub fn with_timings(mut self, timings: Timings) -> Self {
        self.timings = timings;
        self
    }
}

/// View builder configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Set display names in the order they are shown.
    ///
    /// Sets missing from this list are shown after the listed ones.
    pub set_order: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            set_order: [
                "The Great Dark Beyond",
                "Perils in Paradise",
                "Whizbang's Workshop",
                "Into the Emerald Dream",
                "Across the Timeways",
                "The Lost City of Un'Goro",
                "Event",
                "Core",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

impl ViewConfig {
    /// Replace the set order.
    #[must_use]
    pub fn with_set_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_order = order.into_iter().map(Into::into).collect();
        self
    }
}

/// Maps one display name to the raw set codes that belong to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetMapping {
    pub display_name: String,
    pub codes: Vec<String>,
}

impl SetMapping {
    pub fn new<I, S>(display_name: impl Into<String>, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            display_name: display_name.into(),
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ingestion configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// URL of the collectible card dump.
    pub source_url: String,

    /// Image URL template; `{id}` is replaced by the card id.
    pub image_url_template: String,

    /// Set code table, in reporting order.
    pub sets: Vec<SetMapping>,

    /// Drop cards whose set code is not in `sets`.
    pub mapped_only: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            image_url_template: DEFAULT_IMAGE_URL_TEMPLATE.to_string(),
            sets: vec![
                SetMapping::new("The Great Dark Beyond", ["SPACE"]),
                SetMapping::new("Perils in Paradise", ["ISLAND_VACATION"]),
                SetMapping::new("Whizbang's Workshop", ["WHIZBANGS_WORKSHOP"]),
                SetMapping::new("Into the Emerald Dream", ["EMERALD_DREAM"]),
                SetMapping::new("The Lost City of Un'Goro", ["THE_LOST_CITY"]),
                SetMapping::new("Across the Timeways", ["TIME_TRAVEL"]),
                SetMapping::new("Event", ["EVENT"]),
                SetMapping::new("Core", ["CORE"]),
            ],
            mapped_only: false,
        }
    }
}

impl IngestConfig {
    /// Only keep cards from mapped sets.
    #[must_use]
    pub fn mapped_only(mut self) -> Self {
        self.mapped_only = true;
        self
    }

    /// Replace the set code table.
    #[must_use]
    pub fn with_sets(mut self, sets: Vec<SetMapping>) -> Self {
        self.sets = sets;
        self
    }

    /// Build the image URL for a card id.
    #[must_use]
    pub fn image_url(&self, card_id: &str) -> String {
        self.image_url_template.replace("{id}", card_id)
    }
}

/// Complete configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecallConfig {
    /// Where the catalog JSON is read from and written to.
    pub catalog_path: PathBuf,

    pub engine: EngineConfig,

    pub view: ViewConfig,

    pub ingest: IngestConfig,
}

impl Default for RecallConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            engine: EngineConfig::default(),
            view: ViewConfig::default(),
            ingest: IngestConfig::default(),
        }
    }
}

impl RecallConfig {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file is
    /// an error.
    pub fn load(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(target: LOG_TARGET, path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(RecallError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config: Self = serde_json::from_str(&data)
            .map_err(|err| RecallError::json(path.display().to_string(), err))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.engine.submit_key.trim().is_empty() {
            return Err(RecallError::Config("submit_key must not be empty".into()));
        }
        if !self.ingest.image_url_template.contains("{id}") {
            return Err(RecallError::Config(
                "image_url_template must contain an {id} placeholder".into(),
            ));
        }
        Ok(())
    }

    /// Set the catalog path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Replace the engine configuration.
    #[must_use]
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the view configuration.
    #[must_use]
    pub fn with_view(mut self, view: ViewConfig) -> Self {
        self.view = view;
        self
    }

    /// Replace the ingestion configuration.
    #[must_use]
    pub fn with_ingest(mut self, ingest: IngestConfig) -> Self {
        self.ingest = ingest;
        self
    }
}
