//! Pluggable config validation strategies
//!
//! Separates pure schema checks (what plan assembly itself enforces) from
//! filesystem checks that confirm the configured inputs exist.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::entry::check_page_name;
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::page::PageRegistry;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, layout: &ProjectLayout, pages: &PageRegistry) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use folio_config::{ConfigValidator, PageDescriptor, PageRegistry, ProjectLayout, SchemaValidator};
///
/// let pages = PageRegistry::new(vec![PageDescriptor::new("home", "Home")]);
/// SchemaValidator.validate(&ProjectLayout::default(), &pages).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, layout: &ProjectLayout, pages: &PageRegistry) -> Result<()> {
        if pages.is_empty() {
            return Err(ConfigError::NoPages);
        }

        layout.require_paths()?;

        let mut seen = HashSet::with_capacity(pages.len());
        for page in pages {
            check_page_name(&page.name)?;
            if page.name.contains(['/', '\\']) {
                return Err(ConfigError::invalid_value(
                    "pages",
                    format!("page name '{}' must not contain path separators", page.name),
                ));
            }
            if !seen.insert(page.name.as_str()) {
                return Err(ConfigError::DuplicatePage {
                    name: page.name.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Confirms that every page entry module, the template, the favicon and the
/// theme inputs exist. File contents are not inspected.
pub struct FsValidator;

impl FsValidator {
    /// Every missing input, in the order they would be consumed.
    pub fn missing(&self, layout: &ProjectLayout, pages: &PageRegistry) -> Vec<(&'static str, PathBuf)> {
        let mut checks: Vec<(&'static str, PathBuf)> = pages
            .iter()
            .map(|page| ("entry source", layout.entry_source(&page.name)))
            .collect();
        checks.push(("template", layout.resolved_template()));
        checks.push(("favicon", layout.resolve(&layout.favicon)));
        checks.push(("theme styles directory", layout.resolve(&layout.theme.styles_dir)));
        checks.push(("theme variables file", layout.resolve(&layout.theme.var_file)));

        checks
            .into_iter()
            .filter(|(_, path)| !path.exists())
            .collect()
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, layout: &ProjectLayout, pages: &PageRegistry) -> Result<()> {
        SchemaValidator.validate(layout, pages)?;

        match self.missing(layout, pages).into_iter().next() {
            Some((field, path)) => Err(ConfigError::PathNotFound { field, path }),
            None => Ok(()),
        }
    }
}

pub fn validate_schema(layout: &ProjectLayout, pages: &PageRegistry) -> Result<()> {
    SchemaValidator.validate(layout, pages)
}

pub fn validate_fs(layout: &ProjectLayout, pages: &PageRegistry) -> Result<()> {
    FsValidator.validate(layout, pages)
}
