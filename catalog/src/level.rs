//! Level configuration as authored by level designers (JSON).

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::models::Item;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LevelConfig {
    /// Every item that may appear in the level, in catalog order.
    pub items: Vec<Item>,

    /// How many items the player is asked to find at once.
    #[serde(default = "default_max_concurrent")]
    pub max_concurrent_items: usize,

    /// Explicit presentation order. Empty means catalog order.
    #[serde(default)]
    pub item_order: Vec<String>,

    /// Whether the session runs against a countdown.
    #[serde(default = "default_use_timer")]
    pub use_timer: bool,

    /// Countdown length in seconds.
    #[serde(default = "default_timer_duration_secs")]
    pub timer_duration_secs: f64,

    /// Presentation hint: show item pictures instead of names.
    #[serde(default)]
    pub use_images_instead_of_text: bool,
}

fn default_max_concurrent() -> usize {
    3
}

fn default_use_timer() -> bool {
    true
}

fn default_timer_duration_secs() -> f64 {
    120.0
}

impl LevelConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let cfg: LevelConfig = serde_json::from_str(raw)?;
        // Reject a bad duration at load time rather than at timer start.
        cfg.timer_duration()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let cfg = Self::from_json_str(&raw)?;

        info!(
            path = %path.display(),
            items = cfg.items.len(),
            max_concurrent = cfg.max_concurrent_items,
            use_timer = cfg.use_timer,
            "level config loaded"
        );

        Ok(cfg)
    }

    pub fn catalog(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.items.clone())
    }

    pub fn timer_duration(&self) -> Result<Duration, CatalogError> {
        Duration::try_from_secs_f64(self.timer_duration_secs)
            .map_err(|_| CatalogError::InvalidTimerDuration(self.timer_duration_secs))
    }
}
