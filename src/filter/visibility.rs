use serde::{Deserialize, Serialize};

use crate::types::filter_state::FilterState;
use crate::types::identifiers::ProjectId;

/// Outcome of one visibility pass, in card order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityReport {
    pub filter: FilterState,
    pub visible: Vec<ProjectId>,
    pub hidden: Vec<ProjectId>,
}

impl VisibilityReport {
    pub fn new(filter: FilterState) -> Self {
        VisibilityReport {
            filter,
            visible: Vec::new(),
            hidden: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }
}
