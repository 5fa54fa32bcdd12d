//! Project catalog and filter engine for a personal portfolio page.
//!
//! `portfolio-core` holds the fixed list of projects, renders one card per
//! project onto a host-provided display surface, and keeps card visibility
//! in step with the selected category filter. Visibility is a pure function
//! of the filter and the catalog.
//!
//! The [`theme`] and [`chrome`] modules carry the small pieces of page state
//! around the grid: theme preference, nav highlighting, stat counters and
//! notifications.

pub mod catalog;
pub mod chrome;
pub mod config;
pub mod filter;
pub mod logging;
pub mod render;
pub mod theme;
pub mod types;

pub use catalog::{Catalog, CatalogError, ProjectRecord};
pub use config::{ConfigError, PortfolioConfig};
pub use filter::{FilterEngine, VisibilityReport};
pub use logging::{init_logging, LoggingError};
pub use render::{DisplaySurface, MemorySurface, RenderedCard};
pub use theme::{Theme, ThemeController};
pub use types::{FilterState, ProjectId};
