use std::collections::BTreeSet;

use thiserror::Error;

use super::builtin;
use super::project::{ProjectRecord, CATEGORY_SEPARATOR};
use crate::types::identifiers::{CatalogVersion, ProjectId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Project id must be positive, got {0}")]
    InvalidId(ProjectId),
    #[error("Duplicate project id: {0}")]
    DuplicateId(ProjectId),
    #[error("Project {0} has no categories")]
    EmptyCategories(ProjectId),
    #[error("Project {0} has invalid category {1:?}: must be non-empty and contain no ','")]
    InvalidCategory(ProjectId, String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The fixed, ordered list of projects.
///
/// Iteration order is declaration order. There are no mutation methods;
/// a different list means a different catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    version: CatalogVersion,
}

impl Catalog {
    /// Validate and freeze a list of records.
    pub fn new(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !record.id.is_valid() {
                return Err(CatalogError::InvalidId(record.id));
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            if record.categories.is_empty() {
                return Err(CatalogError::EmptyCategories(record.id));
            }
            // Cards carry categories comma-joined, so a category must
            // survive a split on ','.
            if let Some(bad) = record
                .categories
                .iter()
                .find(|c| c.is_empty() || c.contains(CATEGORY_SEPARATOR))
            {
                return Err(CatalogError::InvalidCategory(record.id, bad.clone()));
            }
        }

        let version = CatalogVersion::from_records(&records)?;
        Ok(Catalog { records, version })
    }

    /// The six sample projects shown on the portfolio page.
    pub fn builtin() -> Self {
        Self::new(builtin::records())
            .expect("built-in records have positive unique ids and clean categories")
    }

    /// Parse an ordered JSON array of records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter()
    }

    pub fn get(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    /// Category vocabulary in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .flat_map(|r| r.categories.iter())
            .filter(|c| seen.insert(c.as_str()))
            .map(String::as_str)
            .collect()
    }
}
