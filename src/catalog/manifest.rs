use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Catalog;
use crate::types::identifiers::CatalogVersion;

/// Summary of a catalog as published alongside the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub catalog_version: CatalogVersion,
    pub created_at: DateTime<Utc>, // informational only
    pub project_count: usize,
    pub categories: Vec<String>,
}

impl CatalogManifest {
    pub fn describe(catalog: &Catalog) -> Self {
        CatalogManifest {
            catalog_version: catalog.version().clone(),
            created_at: Utc::now(),
            project_count: catalog.len(),
            categories: catalog.categories().into_iter().map(String::from).collect(),
        }
    }
}
