pub mod visibility;

use std::time::Duration;

use log::{debug, info};

use crate::catalog::Catalog;
use crate::config::PortfolioConfig;
use crate::render::{build_card, DisplaySurface};
use crate::types::filter_state::FilterState;
pub use visibility::VisibilityReport;

/// Keeps rendered project cards consistent with the current filter.
///
/// Holds the immutable catalog and the single `FilterState`; cards live on
/// the surface passed to each call.
pub struct FilterEngine {
    catalog: Catalog,
    state: FilterState,
    card_stagger: Duration,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(Catalog::builtin(), &PortfolioConfig::v0())
    }
}

impl FilterEngine {
    pub fn new(catalog: Catalog, config: &PortfolioConfig) -> Self {
        Self {
            catalog,
            state: FilterState::All,
            card_stagger: config.card_stagger(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_filter(&self) -> &FilterState {
        &self.state
    }

    /// Render one card per project, replacing whatever the surface held.
    ///
    /// Returns the number of cards created. A missing surface makes this a
    /// no-op returning 0.
    pub fn load_catalog<S: DisplaySurface>(&self, surface: Option<&mut S>) -> usize {
        let Some(surface) = surface else {
            debug!("event=catalog_load status=skipped reason=no_surface");
            return 0;
        };

        surface.clear();
        for (index, record) in self.catalog.iter().enumerate() {
            let mut card = build_card(record);
            card.animation_delay = self.card_stagger * index as u32;
            surface.append(card);
        }

        debug_assert_eq!(surface.cards().len(), self.catalog.len());
        debug_assert!(surface
            .cards()
            .iter()
            .zip(self.catalog.iter())
            .all(|(card, record)| card.project_id == record.id));

        info!(
            "event=catalog_load status=ok cards={} catalog_version={}",
            self.catalog.len(),
            self.catalog.version().as_str()
        );
        self.catalog.len()
    }

    /// Select `value` ("all" or a category) and recompute every card.
    ///
    /// Unknown categories are accepted and match nothing.
    pub fn set_filter<S: DisplaySurface>(
        &mut self,
        value: &str,
        surface: &mut S,
    ) -> VisibilityReport {
        self.state = FilterState::parse(value);
        surface.mark_active_filter(&self.state);
        debug!("event=filter_set filter={}", self.state);
        self.recompute_visibility(surface)
    }

    /// visible <=> filter is "all" or names one of the card's categories.
    pub fn recompute_visibility<S: DisplaySurface>(&self, surface: &mut S) -> VisibilityReport {
        let decisions: Vec<_> = surface
            .cards()
            .iter()
            .map(|card| (card.project_id, self.state.matches(card.categories())))
            .collect();

        let mut report = VisibilityReport::new(self.state.clone());
        for (index, (project_id, visible)) in decisions.into_iter().enumerate() {
            surface.set_visible(index, visible, self.card_stagger * index as u32);
            if visible {
                report.visible.push(project_id);
            } else {
                report.hidden.push(project_id);
            }
        }

        debug!(
            "event=visibility_recomputed filter={} visible={} hidden={}",
            report.filter,
            report.visible.len(),
            report.hidden.len()
        );
        report
    }
}
