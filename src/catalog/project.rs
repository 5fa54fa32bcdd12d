use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::identifiers::ProjectId;

/// Kind of an outbound project link.
///
/// The four known kinds have dedicated icons; anything else is kept verbatim
/// in `Other` and rendered with the fallback icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LinkKind {
    Demo,
    Github,
    Publication,
    Website,
    Other(String),
}

impl LinkKind {
    pub fn as_str(&self) -> &str {
        match self {
            LinkKind::Demo => "demo",
            LinkKind::Github => "github",
            LinkKind::Publication => "publication",
            LinkKind::Website => "website",
            LinkKind::Other(kind) => kind,
        }
    }
}

impl From<&str> for LinkKind {
    fn from(value: &str) -> Self {
        match value {
            "demo" => LinkKind::Demo,
            "github" => LinkKind::Github,
            "publication" => LinkKind::Publication,
            "website" => LinkKind::Website,
            other => LinkKind::Other(other.to_string()),
        }
    }
}

impl From<String> for LinkKind {
    fn from(value: String) -> Self {
        LinkKind::from(value.as_str())
    }
}

impl From<LinkKind> for String {
    fn from(kind: LinkKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Insertion-ordered mapping from link kind to target.
///
/// Serialized as a JSON object whose key order is the iteration order.
/// Inserting an existing kind replaces its target in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Links {
    entries: Vec<(LinkKind, String)>,
}

impl Links {
    pub fn new() -> Self {
        Links { entries: Vec::new() }
    }

    pub fn insert(&mut self, kind: impl Into<LinkKind>, target: impl Into<String>) {
        let kind = kind.into();
        let target = target.into();
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = target,
            None => self.entries.push((kind, target)),
        }
    }

    pub fn with(mut self, kind: impl Into<LinkKind>, target: impl Into<String>) -> Self {
        self.insert(kind, target);
        self
    }

    pub fn get(&self, kind: &LinkKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, target)| target.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&LinkKind, &str)> {
        self.entries.iter().map(|(k, t)| (k, t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (kind, target) in &self.entries {
            map.serialize_entry(kind.as_str(), target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinksVisitor;

        impl<'de> Visitor<'de> for LinksVisitor {
            type Value = Links;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of link kind to target")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Links, A::Error> {
                let mut links = Links::new();
                while let Some((kind, target)) = access.next_entry::<String, String>()? {
                    links.insert(kind, target);
                }
                Ok(links)
            }
        }

        deserializer.deserialize_map(LinksVisitor)
    }
}

/// Joins categories in the tag attached to rendered cards.
pub const CATEGORY_SEPARATOR: char = ',';

/// One portfolio project. Immutable once placed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Display-only labels, rendered in order.
    pub tags: Vec<String>,
    /// Filter membership. Never empty inside a catalog.
    pub categories: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub links: Links,
}

impl ProjectRecord {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Categories in the form attached to rendered cards.
    pub fn categories_tag(&self) -> String {
        let separator = CATEGORY_SEPARATOR.to_string();
        self.categories.join(separator.as_str())
    }
}
