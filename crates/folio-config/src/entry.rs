//! Entry resolution: one bundler entry and one generated document per page.

use std::collections::HashSet;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::page::PageDescriptor;
use crate::split::{RESERVED_CHUNKS, RUNTIME_CHUNK, VENDOR_CHUNK};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPoint {
    pub name: String,
    pub source_paths: Vec<PathBuf>,
}

/// Configuration for one invocation of the HTML generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputArtifact {
    pub output_filename: String,
    pub template_path: PathBuf,
    /// Script emission order: runtime, vendor, then the page chunk
    pub included_chunks: Vec<String>,
    pub favicon_path: PathBuf,
    pub page_name: String,
    pub page_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub entries: IndexMap<String, EntryPoint>,
    pub artifacts: Vec<OutputArtifact>,
}

/// Map each page to its entry point and output document.
///
/// Page names are both entry keys and output filenames, so a repeated name
/// fails the whole resolution.
pub fn resolve(pages: &[PageDescriptor], layout: &ProjectLayout) -> Result<Resolution> {
    let mut seen = HashSet::with_capacity(pages.len());
    for page in pages {
        check_page_name(&page.name)?;
        if !seen.insert(page.name.as_str()) {
            return Err(ConfigError::DuplicatePage {
                name: page.name.clone(),
            });
        }
    }

    let template_path = layout.resolved_template();
    let mut resolution = Resolution::default();

    for page in pages {
        let source = layout.entry_source(&page.name);
        debug!(page = %page.name, source = %source.display(), "resolved page entry");

        resolution.entries.insert(
            page.name.clone(),
            EntryPoint {
                name: page.name.clone(),
                source_paths: vec![source],
            },
        );

        resolution.artifacts.push(OutputArtifact {
            output_filename: format!("{}.html", page.name),
            template_path: template_path.clone(),
            included_chunks: vec![
                RUNTIME_CHUNK.to_string(),
                VENDOR_CHUNK.to_string(),
                page.name.clone(),
            ],
            favicon_path: layout.favicon.clone(),
            page_name: page.name.clone(),
            page_title: page.title.clone(),
        });
    }

    Ok(resolution)
}

/// A page name must be non-blank and must not shadow a shared chunk.
pub(crate) fn check_page_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ConfigError::invalid_value(
            "pages",
            "every page needs a non-empty name",
        ));
    }
    if RESERVED_CHUNKS.contains(&name) {
        return Err(ConfigError::invalid_value(
            "pages",
            format!("page name '{name}' is reserved for a shared chunk"),
        ));
    }
    Ok(())
}
