//! Build side effects, expressed as typed descriptors for external plugins.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::entry::OutputArtifact;

/// One externally implemented build step. Order in the plan is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SideEffect {
    /// Generate one HTML document
    EmitDocument(OutputArtifact),

    /// Write stylesheets to their own files instead of inlining them into scripts
    ExtractStyles {
        filename: String,
        chunk_filename: String,
    },

    /// Derive a theme stylesheet from the style sources and a variables file
    RunThemeProcessor {
        styles_dir: PathBuf,
        var_file: PathBuf,
        output_file: PathBuf,
    },

    MinifyScripts {
        parallel: bool,
        cache: bool,
        source_map: bool,
    },

    MinifyStyles,

    /// Remove previous output before writing
    CleanOutput { paths: Vec<PathBuf> },

    LaunchBrowser { url: String },
}

impl SideEffect {
    pub fn kind(&self) -> &'static str {
        match self {
            SideEffect::EmitDocument(_) => "emit_document",
            SideEffect::ExtractStyles { .. } => "extract_styles",
            SideEffect::RunThemeProcessor { .. } => "run_theme_processor",
            SideEffect::MinifyScripts { .. } => "minify_scripts",
            SideEffect::MinifyStyles => "minify_styles",
            SideEffect::CleanOutput { .. } => "clean_output",
            SideEffect::LaunchBrowser { .. } => "launch_browser",
        }
    }

    pub fn artifact(&self) -> Option<&OutputArtifact> {
        match self {
            SideEffect::EmitDocument(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// Steps that only make sense when building for release.
    pub fn is_production_only(&self) -> bool {
        matches!(
            self,
            SideEffect::MinifyScripts { .. }
                | SideEffect::MinifyStyles
                | SideEffect::CleanOutput { .. }
        )
    }
}
