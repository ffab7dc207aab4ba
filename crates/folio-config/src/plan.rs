//! The build plan and the base plan builder.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::dev::{DevOptions, DevServerSettings};
use crate::entry::{EntryPoint, OutputArtifact, Resolution, resolve};
use crate::error::{ConfigError, Result};
use crate::layout::ProjectLayout;
use crate::loaders::{ModuleRule, default_module_rules};
use crate::mode::{Mode, ModeOverlay, ModePolicy, apply_mode};
use crate::page::PageDescriptor;
use crate::plugin::SideEffect;
use crate::split::{RUNTIME_CHUNK, SplitPolicy, build_split_rules};

/// Script filenames carry a short content hash so changed bundles bust caches.
pub const SCRIPT_FILENAME: &str = "[name].[hash:8].js";
pub const STYLE_FILENAME: &str = "[name].css";
pub const STYLE_CHUNK_FILENAME: &str = "[name].[contenthash:8].css";
pub const STATS_PRESET: &str = "errors-warnings";

/// Debug map strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    /// Full external source maps
    SourceMap,
    /// Fast rebuilds, maps inlined into eval'd modules
    EvalCheapModuleSourceMap,
}

impl Devtool {
    pub fn as_str(self) -> &'static str {
        match self {
            Devtool::SourceMap => "source-map",
            Devtool::EvalCheapModuleSourceMap => "eval-cheap-module-source-map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub filename: String,
}

/// Everything the external bundler needs for one invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPlan {
    pub mode: Mode,
    pub stats: String,
    pub output: OutputSettings,
    /// Bootstrap logic lives in its own chunk so page chunks cache independently
    pub runtime_chunk: String,
    pub entries: IndexMap<String, EntryPoint>,
    pub module_rules: Vec<ModuleRule>,
    pub split: SplitPolicy,
    pub plugins: Vec<SideEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,
}

impl BuildPlan {
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Generated documents, in page order.
    pub fn artifacts(&self) -> impl Iterator<Item = &OutputArtifact> {
        self.plugins.iter().filter_map(SideEffect::artifact)
    }

    pub fn plugins_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a SideEffect> {
        self.plugins.iter().filter(move |plugin| plugin.kind() == kind)
    }

    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "plan".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

/// Compose entries, generated documents, split rules and fixed side effects
/// into the mode-independent base plan.
///
/// All configuration errors surface here, before any side effect is registered.
pub fn build_base_plan(
    mode: &Mode,
    pages: &[PageDescriptor],
    layout: &ProjectLayout,
) -> Result<BuildPlan> {
    if pages.is_empty() {
        return Err(ConfigError::NoPages);
    }
    layout.require_paths()?;

    let Resolution { entries, artifacts } = resolve(pages, layout)?;

    let mut plugins = Vec::with_capacity(artifacts.len() + 2);
    // the theme file must exist before style extraction picks it up
    plugins.push(theme_processor(layout));
    plugins.push(SideEffect::ExtractStyles {
        filename: STYLE_FILENAME.to_string(),
        chunk_filename: STYLE_CHUNK_FILENAME.to_string(),
    });
    plugins.extend(artifacts.into_iter().map(SideEffect::EmitDocument));

    let plan = BuildPlan {
        mode: mode.clone(),
        stats: STATS_PRESET.to_string(),
        output: OutputSettings {
            path: layout.resolved_output_dir(),
            filename: SCRIPT_FILENAME.to_string(),
        },
        runtime_chunk: RUNTIME_CHUNK.to_string(),
        entries,
        module_rules: default_module_rules(),
        split: build_split_rules(),
        plugins,
        dev_server: None,
        devtool: Some(Devtool::SourceMap),
    };

    info!(
        mode = %plan.mode,
        pages = plan.entries.len(),
        plugins = plan.plugins.len(),
        "assembled base build plan"
    );

    Ok(plan)
}

/// Build the base plan and lay the overlay for `mode` onto it.
///
/// # Example
///
/// ```
/// use folio_config::{ModePolicy, PageDescriptor, ProjectLayout, DevOptions, assemble};
///
/// let pages = vec![
///     PageDescriptor::new("home", "Home"),
///     PageDescriptor::new("about", "About"),
/// ];
/// let plan = assemble(
///     "production",
///     &pages,
///     &ProjectLayout::rooted("/site"),
///     &DevOptions::default(),
///     ModePolicy::Permissive,
/// )
/// .unwrap();
///
/// assert_eq!(plan.entry_names().collect::<Vec<_>>(), vec!["home", "about"]);
/// assert!(plan.dev_server.is_none());
/// ```
pub fn assemble(
    mode: &str,
    pages: &[PageDescriptor],
    layout: &ProjectLayout,
    dev: &DevOptions,
    policy: ModePolicy,
) -> Result<BuildPlan> {
    let mode = Mode::from(mode);
    policy.check(&mode)?;

    let base = build_base_plan(&mode, pages, layout)?;
    let overlay = ModeOverlay::select(&mode, layout, dev);
    apply_mode(base, &overlay, policy)
}

fn theme_processor(layout: &ProjectLayout) -> SideEffect {
    SideEffect::RunThemeProcessor {
        styles_dir: layout.resolve(&layout.theme.styles_dir),
        var_file: layout.resolve(&layout.theme.var_file),
        output_file: layout.resolve(&layout.theme.output_file),
    }
}
