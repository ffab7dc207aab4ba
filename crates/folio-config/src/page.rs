//! Page registry: the ordered list of pages a project declares.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A single page of the site. `name` doubles as the entry key and the
/// output filename stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl PageDescriptor {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// Ordered, read-only collection of page descriptors.
///
/// The registry does not enforce uniqueness; duplicate names are reported by
/// the entry resolver when the plan is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageRegistry {
    pages: Vec<PageDescriptor>,
}

impl PageRegistry {
    pub fn new(pages: Vec<PageDescriptor>) -> Self {
        Self { pages }
    }

    /// Parse a JSON array of `{ "name": ..., "title": ... }` objects.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_config::PageRegistry;
    ///
    /// let pages = PageRegistry::from_json_str(
    ///     r#"[{"name": "home", "title": "Home"}, {"name": "about", "title": "About"}]"#,
    /// )
    /// .unwrap();
    /// assert_eq!(pages.names().collect::<Vec<_>>(), vec!["home", "about"]);
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::invalid_value("pages", format!("Invalid JSON: {e}")))
    }

    /// Load a pages file from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageDescriptor> {
        self.pages.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.name.as_str())
    }

    pub fn as_slice(&self) -> &[PageDescriptor] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl From<Vec<PageDescriptor>> for PageRegistry {
    fn from(pages: Vec<PageDescriptor>) -> Self {
        Self::new(pages)
    }
}

impl<'a> IntoIterator for &'a PageRegistry {
    type Item = &'a PageDescriptor;
    type IntoIter = std::slice::Iter<'a, PageDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}
