//! Project configuration: layout, pages, dev server options and mode policy.
//!
//! For file discovery, see the `discovery` module.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dev::DevOptions;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::mode::ModePolicy;
use crate::page::{PageDescriptor, PageRegistry};
use crate::plan::{BuildPlan, assemble};

/// Mode used when neither the caller nor the config names one.
pub const DEFAULT_MODE: &str = "production";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Build mode to use when the caller does not pass one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default)]
    pub layout: ProjectLayout,

    #[serde(default)]
    pub dev: DevOptions,

    /// Inline page declarations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<PageDescriptor>,

    /// JSON file holding the page list, relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages_file: Option<PathBuf>,

    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode_policy: ModePolicy,
}

impl FolioConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use folio_config::FolioConfig;
    /// use serde_json::json;
    ///
    /// let config = FolioConfig::from_value(json!({
    ///     "pages": [{ "name": "home", "title": "Home" }],
    ///     "dev": { "port": 8080 }
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.pages[0].name, "home");
    /// assert_eq!(config.dev.port, 8080);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Anchor the layout root under the directory the config came from.
    pub fn rebase(mut self, base: &Path) -> Self {
        self.layout.rebase(base);
        self
    }

    /// The mode to build: `requested` if given, else the configured default.
    pub fn effective_mode<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .or(self.mode.as_deref())
            .unwrap_or(DEFAULT_MODE)
    }

    /// Gather the page registry from inline declarations or the pages file.
    pub fn load_pages(&self) -> Result<PageRegistry> {
        match (&self.pages_file, self.pages.is_empty()) {
            (Some(_), false) => Err(ConfigError::invalid_value(
                "pages",
                "declare pages inline or in pages_file, not both",
            )),
            (Some(file), true) => PageRegistry::from_path(self.layout.resolve(file)),
            (None, _) => Ok(PageRegistry::new(self.pages.clone())),
        }
    }

    /// Assemble the final plan for `pages` in `mode`.
    pub fn assemble(&self, mode: &str, pages: &PageRegistry) -> Result<BuildPlan> {
        assemble(
            mode,
            pages.as_slice(),
            &self.layout,
            &self.dev,
            self.settings.mode_policy,
        )
    }

    /// Load the pages and assemble the plan in one step.
    pub fn plan(&self, mode: Option<&str>) -> Result<BuildPlan> {
        let pages = self.load_pages()?;
        self.assemble(self.effective_mode(mode), &pages)
    }
}
