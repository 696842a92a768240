use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tierlist_reorder::Orientation;
use tracing::{info, warn};

/// Board tuning, read from `board.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Quiet period before a typed search is applied.
    pub search_debounce_ms: u64,
    /// Axis of the tier navigator list.
    pub orientation: Orientation,
    /// Scroll offset (px) above which the sticky filter bar may hide.
    pub sticky_hide_threshold: f64,
    /// Scroll movement (px) ignored as jitter.
    pub scroll_delta: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: 300,
            orientation: Orientation::Vertical,
            sticky_hide_threshold: 200.0,
            scroll_delta: 8.0,
        }
    }
}

impl BoardConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Loads config from `path`. A missing, unreadable or invalid file gives
    /// the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No board config at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<BoardConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded board config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!(
                        "Failed to parse board config {:?}: {}. Falling back to defaults.",
                        path, e
                    );
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read board config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
