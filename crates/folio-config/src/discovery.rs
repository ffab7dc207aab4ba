//! File-based config discovery for CLI use
//!
//! Handles finding and loading Folio configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::FolioConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "folio.toml";
pub const PACKAGE_JSON: &str = "package.json";
/// Field of package.json that may hold the configuration
pub const PACKAGE_FIELD: &str = "folio";

/// Where a discovered configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Toml(PathBuf),
    PackageJson(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Toml(path) | ConfigSource::PackageJson(path) => path,
        }
    }
}

/// File-based configuration discovery
///
/// Looks for `folio.toml`, then for a `folio` field in `package.json`.
/// Library users can build a `FolioConfig` with `FolioConfig::from_value()`
/// instead.
///
/// # Example
///
/// ```no_run
/// use folio_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn find(&self) -> Option<ConfigSource> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(ConfigSource::Toml(toml_path));
        }

        let pkg_path = self.root.join(PACKAGE_JSON);
        if let Ok(content) = fs::read_to_string(&pkg_path) {
            if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                if parsed.get(PACKAGE_FIELD).is_some_and(|v| !v.is_null()) {
                    return Some(ConfigSource::PackageJson(pkg_path));
                }
            }
        }

        None
    }

    /// Load the discovered config, with its layout anchored at the discovery root.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<FolioConfig> {
        let source = self.find().ok_or(ConfigError::NotFound)?;
        let value = read_source(&source)?;
        debug!(path = %source.path().display(), "loaded configuration");
        Ok(FolioConfig::from_value(value)?.rebase(&self.root))
    }

    /// Like [`load`](Self::load), falling back to defaults when nothing is found.
    pub fn load_or_default(&self) -> Result<FolioConfig> {
        match self.load() {
            Err(ConfigError::NotFound) => Ok(FolioConfig::default().rebase(&self.root)),
            other => other,
        }
    }
}

/// Read a config source into a JSON value without interpreting it.
pub fn read_source(source: &ConfigSource) -> Result<Value> {
    match source {
        ConfigSource::Toml(path) => {
            let content = fs::read_to_string(path)?;
            let toml_val: toml::Value =
                toml::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: "toml".to_string(),
                    hint: Some(format!("Invalid TOML syntax: {e}")),
                })?;
            serde_json::to_value(toml_val).map_err(|e| ConfigError::InvalidValue {
                field: "toml".to_string(),
                hint: Some(format!("TOML to JSON conversion failed: {e}")),
            })
        }
        ConfigSource::PackageJson(path) => {
            let content = fs::read_to_string(path)?;
            let mut parsed: Value =
                serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
                    field: PACKAGE_JSON.to_string(),
                    hint: Some(format!("Invalid JSON: {e}")),
                })?;

            match parsed.get_mut(PACKAGE_FIELD).map(Value::take) {
                Some(value) if !value.is_null() => Ok(value),
                _ => Err(ConfigError::InvalidValue {
                    field: PACKAGE_FIELD.to_string(),
                    hint: Some("Add a 'folio' field to your package.json".to_string()),
                }),
            }
        }
    }
}

/// Discover and load config from the current directory (convenience function)
pub fn discover() -> Result<FolioConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}
