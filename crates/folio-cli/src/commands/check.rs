//! Check command implementation.
//!
//! Validates configuration and project inputs without assembling a plan.

use crate::cli::CheckArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::ui;
use folio_config::{ConfigValidator, FsValidator, Mode, SchemaValidator};

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load layered configuration
/// 2. Validate the page list, path settings and the configured mode
/// 3. Confirm that entry modules, template, favicon and theme files exist
///    (skipped with `--schema-only`)
///
/// # Errors
///
/// Returns the first configuration error, or [`CliError::MissingInputs`]
/// after listing every missing file.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = config::load(&args.project, config::project_overrides(&args.project))?;
    let pages = config::load_pages(&config)?;

    SchemaValidator.validate(&config.layout, &pages)?;
    if let Some(mode) = &config.mode {
        let mode = Mode::from(mode.as_str());
        config.settings.mode_policy.check(&mode)?;
        if !mode.is_known() {
            ui::warning(&format!("Configured mode '{mode}' has no overlay"));
        }
    }
    ui::success(&format!("Configuration is valid ({} pages)", pages.len()));

    if args.schema_only {
        return Ok(());
    }

    ui::info("Checking project files...");
    let missing = FsValidator.missing(&config.layout, &pages);
    if missing.is_empty() {
        ui::success("All checks passed!");
        return Ok(());
    }

    for (field, path) in &missing {
        ui::error(&format!("Missing {field}: {}", path.display()));
    }
    Err(CliError::MissingInputs {
        count: missing.len(),
    })
}
