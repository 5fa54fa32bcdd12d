pub mod store;

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::PortfolioConfig;
pub use store::{JsonFileStore, MemoryStore, PreferenceError, PreferenceStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current page theme, backed by a preference store.
pub struct ThemeController<P> {
    store: P,
    key: String,
    current: Theme,
}

impl<P: PreferenceStore> ThemeController<P> {
    /// Read the stored theme. Absent or unrecognized values fall back to the
    /// configured default.
    pub fn load(store: P, config: &PortfolioConfig) -> Result<Self, PreferenceError> {
        let current = match store.get(&config.theme_key)? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                warn!(
                    "event=theme_load status=ignored reason=unknown_value value={raw} fallback={}",
                    config.default_theme
                );
                config.default_theme
            }),
            None => config.default_theme,
        };
        debug!("event=theme_load status=ok theme={current}");

        Ok(Self {
            store,
            key: config.theme_key.clone(),
            current,
        })
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip dark/light and persist the new value.
    pub fn toggle(&mut self) -> Result<Theme, PreferenceError> {
        let next = self.current.toggled();
        self.store.set(&self.key, next.as_str())?;
        self.current = next;
        debug!("event=theme_toggle theme={next}");
        Ok(next)
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    pub fn into_store(self) -> P {
        self.store
    }
}
