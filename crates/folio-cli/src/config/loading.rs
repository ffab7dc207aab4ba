use crate::cli::ProjectArgs;
use crate::error::{CliError, ConfigError, Result, ResultExt};
use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use folio_config::discovery::{PACKAGE_JSON, read_source};
use folio_config::{ConfigDiscovery, ConfigSource, FolioConfig, PageRegistry};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variables with this prefix override config file values.
pub const ENV_PREFIX: &str = "FOLIO_";
/// Separates nested keys: `FOLIO_DEV__PORT` sets `dev.port`.
pub const ENV_SEPARATOR: &str = "__";

/// Directory the project lives in: `--root`, else the directory of an
/// explicit `--config` file, else the current directory.
pub fn project_root(args: &ProjectArgs) -> Result<PathBuf> {
    if let Some(root) = &args.root {
        return Ok(root.clone());
    }

    let config_dir = args
        .config
        .as_deref()
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty());
    match config_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// The config file to read, if any.
pub fn locate_source(args: &ProjectArgs, root: &Path) -> Result<Option<ConfigSource>> {
    let Some(path) = &args.config else {
        return Ok(ConfigDiscovery::new(root).find());
    };

    if !path.is_file() {
        return Err(CliError::FileNotFound(path.clone()));
    }
    if path.file_name().is_some_and(|name| name == PACKAGE_JSON) {
        Ok(Some(ConfigSource::PackageJson(path.clone())))
    } else {
        Ok(Some(ConfigSource::Toml(path.clone())))
    }
}

/// Load configuration from multiple sources.
/// Priority: `overrides` (CLI args) > environment variables > config file > defaults
///
/// The resulting layout is anchored at the project root.
pub fn load(args: &ProjectArgs, overrides: Value) -> Result<FolioConfig> {
    let root = project_root(args)?;
    let mut figment = Figment::new().merge(Serialized::defaults(FolioConfig::default()));

    match locate_source(args, &root)? {
        Some(ConfigSource::Toml(path)) => {
            debug!(path = %path.display(), "using config file");
            figment = figment.merge(Toml::file(path));
        }
        Some(source @ ConfigSource::PackageJson(_)) => {
            debug!(path = %source.path().display(), "using package.json field");
            figment = figment.merge(Serialized::defaults(read_source(&source)?));
        }
        None => debug!(root = %root.display(), "no config file found, using defaults"),
    }

    // FOLIO_MODE, FOLIO_DEV__PORT, FOLIO_LAYOUT__OUTPUT_DIR, ...
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR));

    figment = figment.merge(Serialized::defaults(overrides));

    let config: FolioConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
        field: "configuration".to_string(),
        hint: Some(e.to_string()),
    })?;

    Ok(config.rebase(&root))
}

/// Gather the configured pages, naming the pages file if it cannot be found.
pub fn load_pages(config: &FolioConfig) -> Result<PageRegistry> {
    match &config.pages_file {
        Some(file) => config.load_pages().with_path(config.layout.resolve(file)),
        None => Ok(config.load_pages()?),
    }
}
