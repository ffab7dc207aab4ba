//! Formatting utilities for plan summaries.

use console::Term;
use folio_config::{BuildPlan, SideEffect};
use owo_colors::OwoColorize;

use super::{colors_enabled, is_quiet};

/// Join chunk names in load order.
///
/// # Examples
///
/// ```
/// use folio_cli::ui::format_chunks;
///
/// let chunks = vec!["manifest".to_string(), "vendor".to_string(), "home".to_string()];
/// assert_eq!(format_chunks(&chunks), "manifest + vendor + home");
/// ```
pub fn format_chunks(chunks: &[String]) -> String {
    chunks.join(" + ")
}

/// One-line description of a side effect.
pub fn side_effect_label(effect: &SideEffect) -> String {
    match effect {
        SideEffect::EmitDocument(artifact) => format!(
            "{} {} ({})",
            effect.kind(),
            artifact.output_filename,
            format_chunks(&artifact.included_chunks)
        ),
        SideEffect::ExtractStyles { filename, .. } => format!("{} {}", effect.kind(), filename),
        SideEffect::RunThemeProcessor { output_file, .. } => {
            format!("{} -> {}", effect.kind(), output_file.display())
        }
        SideEffect::MinifyScripts { parallel, .. } if *parallel => {
            format!("{} (parallel)", effect.kind())
        }
        SideEffect::CleanOutput { paths } => {
            let paths: Vec<_> = paths.iter().map(|p| p.display().to_string()).collect();
            format!("{} {}", effect.kind(), paths.join(", "))
        }
        SideEffect::LaunchBrowser { url } => format!("{} {}", effect.kind(), url),
        _ => effect.kind().to_string(),
    }
}

/// Print a plan summary to stderr.
pub fn print_plan_summary(plan: &BuildPlan) {
    if is_quiet() {
        return;
    }
    let width = (Term::stderr().size().1 as usize).min(80);
    let rule = "─".repeat(width);
    let title = format!("Plan Summary ({})", plan.mode);

    if colors_enabled() {
        eprintln!("\n{}", title.bold().underline());
    } else {
        eprintln!("\n{title}");
    }
    eprintln!("{rule}");

    for name in plan.entry_names() {
        if colors_enabled() {
            eprintln!("  {} {}", "▸".blue(), name.bright_white().bold());
        } else {
            eprintln!("  ▸ {name}");
        }
    }
    for effect in &plan.plugins {
        let label = side_effect_label(effect);
        if colors_enabled() {
            eprintln!("  {} {}", "•".dimmed(), label.dimmed());
        } else {
            eprintln!("  • {label}");
        }
    }

    eprintln!("{rule}");

    if let Some(server) = &plan.dev_server {
        eprintln!("  Dev server: {}:{}", server.host, server.port);
    }
    if let Some(devtool) = plan.devtool {
        eprintln!("  Devtool: {}", devtool.as_str());
    }
    let totals = format!(
        "{} entries, {} side effects",
        plan.entries.len(),
        plan.plugins.len()
    );
    if colors_enabled() {
        eprintln!("  {} {}", "Total:".bold(), totals.green());
    } else {
        eprintln!("  Total: {totals}");
    }
}
