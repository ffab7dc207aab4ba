//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        CliError::FileNotFound(path) => miette::miette!(
            help = "Check the path or run from the project root",
            "File not found: {}",
            path.display()
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert a library ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match err {
        ConfigError::NoPages => miette::miette!(
            help = "Declare [[pages]] in folio.toml or pass --pages <FILE>",
            "No pages declared"
        ),
        ConfigError::DuplicatePage { name } => miette::miette!(
            help = "Each page name becomes an entry and an HTML file; names must be unique",
            "Duplicate page name '{}'",
            name
        ),
        ConfigError::UnknownMode(mode) => miette::miette!(
            help = "Use --mode production or --mode development, or allow unknown modes: drop --strict and set settings.mode_policy = \"permissive\" in folio.toml",
            "Unknown build mode '{}'",
            mode
        ),
        ConfigError::NotFound => miette::miette!(
            help = "Create folio.toml, add a 'folio' field to package.json or pass --config <FILE>",
            "No configuration found"
        ),
        ConfigError::MissingPath { field } => miette::miette!(
            help = format!("Set layout.{field} in folio.toml"),
            "Required path '{}' is empty",
            field
        ),
        other => miette::miette!("Configuration error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn config_errors_keep_their_message() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::DuplicatePage {
            name: "home".to_string(),
        }));
        assert_eq!(report.to_string(), "Duplicate page name 'home'");
        assert!(report.help().is_some());
    }

    #[test]
    fn missing_file_report_names_path() {
        let report = cli_error_to_miette(CliError::FileNotFound(PathBuf::from("pages.json")));
        assert!(report.to_string().contains("pages.json"));
    }

    #[test]
    fn unknown_mode_help_names_both_strict_sources() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::UnknownMode(
            "staging".to_string(),
        )));
        let help = report.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--strict"));
        assert!(help.contains("settings.mode_policy"));
    }

    #[test]
    fn other_errors_fall_back_to_display() {
        let report = cli_error_to_miette(CliError::MissingInputs { count: 2 });
        assert!(report.to_string().starts_with("2 project input(s) missing"));
    }
}
