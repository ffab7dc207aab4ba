//! Module transform rules: which loader chain handles which source files.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::pattern::Pattern;

/// Loader that hands stylesheet output to the style extraction step.
pub const EXTRACT_STYLES_LOADER: &str = "extract-styles";

const AUTOPREFIX_BROWSERS: [&str; 2] = ["ie >= 9", "last 1 version"];

/// A loader invocation; `options` is opaque to the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderSpec {
    pub loader: String,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

impl LoaderSpec {
    pub fn new(loader: impl Into<String>) -> Self {
        Self {
            loader: loader.into(),
            options: Value::Null,
        }
    }

    pub fn with_options(loader: impl Into<String>, options: Value) -> Self {
        Self {
            loader: loader.into(),
            options,
        }
    }
}

/// Loaders apply right to left, as the bundler runs them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleRule {
    pub test: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Pattern>,
    pub loaders: Vec<LoaderSpec>,
}

impl ModuleRule {
    pub fn applies_to(&self, module_path: &str) -> bool {
        self.test.is_match(module_path)
            && !self
                .exclude
                .as_ref()
                .is_some_and(|exclude| exclude.is_match(module_path))
    }
}

/// Script, LESS and CSS rules, in that order.
pub fn default_module_rules() -> Vec<ModuleRule> {
    let scripts = ModuleRule {
        test: Pattern::fixed(r"\.jsx?$"),
        exclude: Some(Pattern::fixed(r"/node_modules/")),
        loaders: vec![LoaderSpec::new("babel-loader")],
    };

    let less = ModuleRule {
        test: Pattern::fixed(r"\.less$"),
        exclude: None,
        loaders: vec![
            LoaderSpec::new(EXTRACT_STYLES_LOADER),
            LoaderSpec::new("css-loader"),
            LoaderSpec::with_options(
                "less-loader",
                json!({
                    "math": "strict",
                    "plugins": [
                        { "autoprefix": { "browsers": AUTOPREFIX_BROWSERS } }
                    ]
                }),
            ),
        ],
    };

    let css = ModuleRule {
        test: Pattern::fixed(r"\.css$"),
        exclude: None,
        loaders: vec![
            LoaderSpec::new(EXTRACT_STYLES_LOADER),
            LoaderSpec::new("css-loader"),
        ],
    };

    vec![scripts, less, css]
}
