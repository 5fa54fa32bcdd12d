use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::theme::Theme;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("counter_steps must be at least 1")]
    ZeroCounterSteps,
}

// Serializable, comparable, explicit defaults.
// Every field is optional in the file; missing ones take the v0 value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub version: String,
    /// Preference-store key holding the theme.
    pub theme_key: String,
    pub default_theme: Theme,
    /// Scroll offset in px past which the nav bar is "scrolled".
    pub nav_scroll_threshold: u32,
    /// Lead in px applied to section tops when picking the active nav link.
    pub section_offset: u32,
    pub counter_steps: u32,
    pub counter_tick_ms: u64,
    pub card_stagger_ms: u64,
    pub log_level: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl PortfolioConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            theme_key: "theme".into(),
            default_theme: Theme::Dark,
            nav_scroll_threshold: 100,
            section_offset: 100,
            counter_steps: 50,
            counter_tick_ms: 40,
            card_stagger_ms: 100,
            log_level: "info".into(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.counter_steps == 0 {
            return Err(ConfigError::ZeroCounterSteps);
        }
        Ok(())
    }

    pub fn card_stagger(&self) -> Duration {
        Duration::from_millis(self.card_stagger_ms)
    }

    pub fn counter_tick(&self) -> Duration {
        Duration::from_millis(self.counter_tick_ms)
    }
}
