//! Navigation bar state derived from the scroll position.

use serde::{Deserialize, Serialize};

use crate::config::PortfolioConfig;

/// A page section as seen by the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    /// Distance in px from the top of the document.
    pub offset_top: u32,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: u32) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

pub fn is_scrolled(scroll_y: u32, threshold: u32) -> bool {
    scroll_y > threshold
}

/// Id of the section whose nav link should be highlighted.
///
/// The last section, in document order, whose top minus `offset` has been
/// scrolled past wins. `None` when no section qualifies.
pub fn active_section(sections: &[Section], scroll_y: u32, offset: u32) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| s.offset_top.saturating_sub(offset) <= scroll_y)
        .map(|s| s.id.as_str())
}

/// Nav link target for a section id.
pub fn nav_href(section_id: &str) -> String {
    format!("#{section_id}")
}

/// Nav bar thresholds taken from the page config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavBar {
    scroll_threshold: u32,
    section_offset: u32,
}

impl NavBar {
    pub fn new(config: &PortfolioConfig) -> Self {
        Self {
            scroll_threshold: config.nav_scroll_threshold,
            section_offset: config.section_offset,
        }
    }

    pub fn is_scrolled(&self, scroll_y: u32) -> bool {
        is_scrolled(scroll_y, self.scroll_threshold)
    }

    pub fn active_section<'a>(&self, sections: &'a [Section], scroll_y: u32) -> Option<&'a str> {
        active_section(sections, scroll_y, self.section_offset)
    }
}
