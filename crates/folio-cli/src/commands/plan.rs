//! Plan command implementation.
//!
//! Loads configuration, assembles the plan for the requested mode and writes
//! it as pretty-printed JSON.

use crate::cli::PlanArgs;
use crate::config;
use crate::error::{Result, ResultExt};
use crate::ui;
use folio_config::{BuildPlan, FolioConfig};
use std::fs;
use tracing::debug;

/// Execute the plan command.
///
/// # Steps
///
/// 1. Load layered configuration (defaults, file, `FOLIO_*` env, flags)
/// 2. Gather the pages (inline or from the pages file)
/// 3. Assemble the base plan and apply the mode overlay
/// 4. Print the JSON to stdout, or write it to `--output`
///
/// # Errors
///
/// Returns errors for invalid configuration, unreadable page lists, duplicate
/// pages, unknown modes under the strict policy, and write failures.
pub fn execute(args: PlanArgs) -> Result<()> {
    let config = config::load(&args.project, config::plan_overrides(&args))?;
    let plan = build(&config)?;
    let json = plan.to_json_pretty()?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_path(parent)?;
            }
            fs::write(path, format!("{json}\n")).with_path(path)?;
            ui::success(&format!(
                "Wrote {} plan to {}",
                plan.mode,
                path.display()
            ));
        }
        None => println!("{json}"),
    }

    ui::print_plan_summary(&plan);
    Ok(())
}

/// Assemble the plan described by `config`.
pub fn build(config: &FolioConfig) -> Result<BuildPlan> {
    let pages = config::load_pages(config)?;
    let mode = config.effective_mode(None);
    debug!(mode, pages = pages.len(), "assembling plan");

    Ok(config.assemble(mode, &pages)?)
}
