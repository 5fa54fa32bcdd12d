use std::time::Duration;

use super::card::RenderedCard;
use crate::types::filter_state::FilterState;

/// The host's display area for project cards.
///
/// Cards are appended in order and addressed by position afterwards.
pub trait DisplaySurface {
    /// Remove every card previously appended.
    fn clear(&mut self);

    fn append(&mut self, card: RenderedCard);

    fn cards(&self) -> &[RenderedCard];

    /// Show or hide the card at `index`. Out-of-range indices are ignored.
    fn set_visible(&mut self, index: usize, visible: bool, delay: Duration);

    /// Values carried by the interactive filter controls, in display order.
    fn filter_controls(&self) -> Vec<FilterState> {
        Vec::new()
    }

    /// Highlight the control matching `filter` and clear the others.
    fn mark_active_filter(&mut self, _filter: &FilterState) {}
}

/// In-memory surface. Used by tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    cards: Vec<RenderedCard>,
    controls: Vec<FilterState>,
    active: Option<FilterState>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_controls<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MemorySurface {
            controls: values
                .into_iter()
                .map(|v| FilterState::parse(v.as_ref()))
                .collect(),
            ..Self::default()
        }
    }

    pub fn active_filter(&self) -> Option<&FilterState> {
        self.active.as_ref()
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &RenderedCard> {
        self.cards.iter().filter(|c| c.visible)
    }
}

impl DisplaySurface for MemorySurface {
    fn clear(&mut self) {
        self.cards.clear();
    }

    fn append(&mut self, card: RenderedCard) {
        self.cards.push(card);
    }

    fn cards(&self) -> &[RenderedCard] {
        &self.cards
    }

    fn set_visible(&mut self, index: usize, visible: bool, delay: Duration) {
        if let Some(card) = self.cards.get_mut(index) {
            card.visible = visible;
            if visible {
                card.animation_delay = delay;
            }
        }
    }

    fn filter_controls(&self) -> Vec<FilterState> {
        self.controls.clone()
    }

    fn mark_active_filter(&mut self, filter: &FilterState) {
        if self.controls.is_empty() || self.controls.contains(filter) {
            self.active = Some(filter.clone());
        } else {
            self.active = None;
        }
    }
}
