use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Wait between a skill bar scrolling into view and its fill starting.
pub const SKILL_REVEAL_DELAY: Duration = Duration::from_millis(500);

/// Proficiency bar in the skills section.
///
/// Renders at zero width until revealed, then at `level` percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBar {
    pub name: String,
    level: u8,
    revealed: bool,
}

impl SkillBar {
    /// `level` is clamped to 0..=100.
    pub fn new(name: impl Into<String>, level: i64) -> Self {
        Self {
            name: name.into(),
            level: level.clamp(0, 100) as u8,
            revealed: false,
        }
    }

    /// Build from the raw `data-level` attribute. `None` when it is not an
    /// integer.
    pub fn from_data_level(name: impl Into<String>, raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(|level| Self::new(name, level))
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Mark the bar as in view. Returns how long the host waits before
    /// applying [`SkillBar::width`].
    pub fn reveal(&mut self) -> Duration {
        self.revealed = true;
        SKILL_REVEAL_DELAY
    }

    /// CSS width of the fill.
    pub fn width(&self) -> String {
        let percent = if self.revealed { self.level } else { 0 };
        format!("{percent}%")
    }
}
