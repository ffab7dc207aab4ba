//! Filesystem conventions for a multi-page project.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Where sources, templates and outputs live.
///
/// Relative paths are resolved against `root` when the plan is assembled;
/// `favicon` is handed to the HTML generator as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory holding one `{page}.{source_ext}` entry module per page
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,

    #[serde(default = "default_source_ext")]
    pub source_ext: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// HTML template shared by every generated page
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_favicon")]
    pub favicon: PathBuf,

    #[serde(default)]
    pub theme: ThemeLayout,
}

/// Inputs and output of the theme color processor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeLayout {
    #[serde(default = "default_styles_dir")]
    pub styles_dir: PathBuf,

    #[serde(default = "default_var_file")]
    pub var_file: PathBuf,

    #[serde(default = "default_theme_output")]
    pub output_file: PathBuf,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            root: default_root(),
            source_root: default_source_root(),
            source_ext: default_source_ext(),
            output_dir: default_output_dir(),
            template: default_template(),
            favicon: default_favicon(),
            theme: ThemeLayout::default(),
        }
    }
}

impl Default for ThemeLayout {
    fn default() -> Self {
        Self {
            styles_dir: default_styles_dir(),
            var_file: default_var_file(),
            output_file: default_theme_output(),
        }
    }
}

impl ProjectLayout {
    /// Layout with every default convention, rooted at `root`.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Resolve a project-relative path against the root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Re-anchor a relative `root` under `base` (the directory the config was found in).
    pub fn rebase(&mut self, base: &Path) {
        if self.root.is_absolute() {
            return;
        }
        self.root = if self.root == Path::new(".") || self.root.as_os_str().is_empty() {
            base.to_path_buf()
        } else {
            base.join(&self.root)
        };
    }

    pub fn entry_source(&self, page_name: &str) -> PathBuf {
        self.resolve(&self.source_root)
            .join(format!("{page_name}.{}", self.source_ext))
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    pub fn resolved_template(&self) -> PathBuf {
        self.resolve(&self.template)
    }

    /// Fail when any path the plan depends on is unset.
    pub fn require_paths(&self) -> Result<()> {
        let required: [(&'static str, &Path); 7] = [
            ("source_root", &self.source_root),
            ("output_dir", &self.output_dir),
            ("template", &self.template),
            ("favicon", &self.favicon),
            ("theme.styles_dir", &self.theme.styles_dir),
            ("theme.var_file", &self.theme.var_file),
            ("theme.output_file", &self.theme.output_file),
        ];

        for (field, path) in required {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::MissingPath { field });
            }
        }

        let ext = self.source_ext.trim_start_matches('.');
        if ext.is_empty() {
            return Err(ConfigError::invalid_value(
                "source_ext",
                "set an entry module extension such as \"js\"",
            ));
        }

        Ok(())
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_source_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_source_ext() -> String {
    "js".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

fn default_template() -> PathBuf {
    PathBuf::from("template.ejs")
}

fn default_favicon() -> PathBuf {
    PathBuf::from("src/images/favicon.ico")
}

fn default_styles_dir() -> PathBuf {
    PathBuf::from("src/styles")
}

fn default_var_file() -> PathBuf {
    PathBuf::from("src/styles/vars.less")
}

fn default_theme_output() -> PathBuf {
    PathBuf::from("dest/color.less")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_source_joins_root_source_root_and_ext() {
        let layout = ProjectLayout::rooted("/project");
        assert_eq!(
            layout.entry_source("home"),
            PathBuf::from("/project/src/home.js")
        );
    }

    #[test]
    fn rebase_replaces_dot_root() {
        let mut layout = ProjectLayout::default();
        layout.rebase(Path::new("/work/site"));
        assert_eq!(layout.root, PathBuf::from("/work/site"));

        let mut nested = ProjectLayout::rooted("web");
        nested.rebase(Path::new("/work"));
        assert_eq!(nested.root, PathBuf::from("/work/web"));

        let mut absolute = ProjectLayout::rooted("/elsewhere");
        absolute.rebase(Path::new("/work"));
        assert_eq!(absolute.root, PathBuf::from("/elsewhere"));
    }

    #[test]
    fn require_paths_names_the_missing_field() {
        let mut layout = ProjectLayout::default();
        layout.output_dir = PathBuf::new();
        assert!(matches!(
            layout.require_paths(),
            Err(ConfigError::MissingPath {
                field: "output_dir"
            })
        ));

        let mut layout = ProjectLayout::default();
        layout.theme.var_file = PathBuf::new();
        assert!(matches!(
            layout.require_paths(),
            Err(ConfigError::MissingPath {
                field: "theme.var_file"
            })
        ));
    }

    #[test]
    fn defaults_deserialize_from_empty_table() {
        let layout: ProjectLayout = toml::from_str("").unwrap();
        assert_eq!(layout, ProjectLayout::default());
    }
}
