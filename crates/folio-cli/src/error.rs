//! Error handling for the Folio CLI.
//!
//! `CliError` is the top-level error returned by commands. Library errors from
//! `folio-config` convert automatically; [`ResultExt::with_path`] names the
//! file behind a not-found error.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_pages(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod diagnostic;

use std::path::PathBuf;
use thiserror::Error;

pub use diagnostic::cli_error_to_miette;
pub use folio_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration and plan assembly errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Project inputs reported missing by `check`
    #[error("{count} project input(s) missing\n\nHint: Create the files or adjust [layout] in folio.toml")]
    MissingInputs { count: usize },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding a path to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            CliError::Config(ConfigError::Io(io_err))
                if io_err.kind() == std::io::ErrorKind::NotFound =>
            {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_convert() {
        let err: CliError = ConfigError::NoPages.into();
        assert!(matches!(err, CliError::Config(ConfigError::NoPages)));
        assert_eq!(err.to_string(), "Configuration error: no pages declared");
    }

    #[test]
    fn with_path_maps_not_found() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result.with_path("/site/pages.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(path) if path == PathBuf::from("/site/pages.json")));
    }

    #[test]
    fn with_path_maps_library_io_not_found() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::Io(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        ));
        let err = result.with_path("pages.json").unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn with_path_keeps_other_errors() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NoPages);
        let err = result.with_path("pages.json").unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NoPages)));
    }

    #[test]
    fn io_errors_other_than_not_found_pass_through() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_path("plan.json").unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn missing_inputs_mentions_count() {
        let msg = CliError::MissingInputs { count: 2 }.to_string();
        assert!(msg.starts_with("2 project input(s) missing"));
        assert!(msg.contains("Hint:"));
    }
}
