use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::ProjectRecord;

/// Stable identity of a project. Always positive once it is part of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(u32);

impl ProjectId {
    pub fn new(raw: u32) -> Self {
        ProjectId(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content hash of a whole catalog, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_records(records: &[ProjectRecord]) -> Result<Self, serde_json::Error> {
        let mut hasher = Sha256::new();
        for record in records {
            // Struct fields serialize in declaration order and links keep
            // their insertion order, so this encoding is canonical.
            let line = serde_json::to_vec(record)?;
            hasher.update(&line);
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        Ok(CatalogVersion(format!("sha256:{}", hex::encode(hash))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
