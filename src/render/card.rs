use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::catalog::{LinkKind, ProjectRecord, CATEGORY_SEPARATOR};
use crate::types::identifiers::ProjectId;

/// Icon used for link kinds without a dedicated entry.
pub const FALLBACK_LINK_ICON: &str = "link";

/// Fixed kind -> icon lookup.
pub fn link_icon(kind: &LinkKind) -> &'static str {
    match kind {
        LinkKind::Demo => "play",
        LinkKind::Github => "code",
        LinkKind::Publication => "file-alt",
        LinkKind::Website => "globe",
        LinkKind::Other(_) => FALLBACK_LINK_ICON,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLink {
    pub kind: LinkKind,
    pub target: String,
    pub icon: String,
}

/// Display unit derived from one project record.
///
/// Owned by the display surface. `categories` is the comma-joined snapshot
/// used for matching; the card never looks back at its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedCard {
    pub project_id: ProjectId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    pub links: Vec<RenderedLink>,
    pub categories: String,
    pub visible: bool,
    pub animation_delay: Duration,
}

impl RenderedCard {
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.split(CATEGORY_SEPARATOR).filter(|c| !c.is_empty())
    }
}

/// Materialize one record as a card. Links follow the record's link order;
/// kinds the record lacks produce nothing.
pub fn build_card(record: &ProjectRecord) -> RenderedCard {
    let links: Vec<RenderedLink> = record
        .links
        .iter()
        .map(|(kind, target)| RenderedLink {
            kind: kind.clone(),
            target: target.to_string(),
            icon: link_icon(kind).to_string(),
        })
        .collect();

    debug!(
        "event=card_built project_id={} links={} tags={}",
        record.id,
        links.len(),
        record.tags.len()
    );

    RenderedCard {
        project_id: record.id,
        title: record.title.clone(),
        description: record.description.clone(),
        image: record.image.clone(),
        tags: record.tags.clone(),
        links,
        categories: record.categories_tag(),
        visible: true,
        animation_delay: Duration::ZERO,
    }
}
