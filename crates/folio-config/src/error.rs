//! Error types for plan assembly and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Plan assembly errors
    #[error("no pages declared")]
    NoPages,

    #[error("duplicate page name '{name}'")]
    DuplicatePage { name: String },

    #[error("required path '{field}' is not set")]
    MissingPath { field: &'static str },

    #[error("unknown build mode '{0}' (expected 'production' or 'development')")]
    UnknownMode(String),

    #[error("invalid overlay merge: {message}")]
    InvalidOverlay { message: String },

    // Filesystem validation errors (for CLI use)
    #[error("{field} not found: {}", path.display())]
    PathNotFound { field: &'static str, path: PathBuf },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("invalid config value for '{field}'{}", hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue {
        field: String,
        hint: Option<String>,
    },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn invalid_value(field: impl Into<String>, hint: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            field: field.into(),
            hint: Some(hint.into()),
        }
    }
}
