mod builtin;
pub mod catalog;
pub mod manifest;
pub mod project;

pub use catalog::{Catalog, CatalogError};
pub use manifest::CatalogManifest;
pub use project::{LinkKind, Links, ProjectRecord, CATEGORY_SEPARATOR};
