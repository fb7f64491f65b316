use crate::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A named membership view over the global element collection
///
/// A page does not own its elements. Removing a page leaves the elements
/// listed in `element_ids` in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub element_ids: Vec<ElementId>,
}

impl Page {
    pub fn new(id: impl Into<PageId>, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            element_ids: Vec::new(),
        }
    }

    /// The page every new project starts with
    pub fn home() -> Self {
        Self::new("home", "Home", "/")
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.element_ids.contains(id)
    }
}
