pub mod filter_state;
pub mod identifiers;

pub use filter_state::FilterState;
pub use identifiers::{CatalogVersion, ProjectId};
