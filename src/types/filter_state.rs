use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel value that matches every project.
pub const ALL: &str = "all";

/// The single current filter selection.
///
/// Parsing never fails: anything other than `"all"` is taken as a category,
/// including categories no project carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterState {
    #[default]
    All,
    Category(String),
}

impl FilterState {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            FilterState::All
        } else {
            FilterState::Category(value.to_string())
        }
    }

    /// Visible iff the filter is `All` or names one of `categories`.
    pub fn matches<'a, I>(&self, categories: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        match self {
            FilterState::All => true,
            FilterState::Category(wanted) => categories.into_iter().any(|c| c == wanted),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterState::All => ALL,
            FilterState::Category(value) => value,
        }
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FilterState {
    fn from(value: String) -> Self {
        if value == ALL {
            FilterState::All
        } else {
            FilterState::Category(value)
        }
    }
}

impl From<FilterState> for String {
    fn from(state: FilterState) -> Self {
        match state {
            FilterState::All => ALL.to_string(),
            FilterState::Category(value) => value,
        }
    }
}
