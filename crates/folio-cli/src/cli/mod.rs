//! Command-line interface definition for Folio.
//!
//! # Command Structure
//!
//! - `folio plan` - Assemble the build plan for a mode and print it as JSON
//! - `folio check` - Validate configuration and project inputs

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, PlanArgs, ProjectArgs};

/// Folio - build plans for multi-page front-end projects
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Assemble build plans for multi-page front-end projects",
    long_about = "Folio turns a list of pages into a complete build plan for an external\n\
                  bundler: one entry and one generated HTML document per page, shared\n\
                  chunk rules, loader rules and mode-specific side effects."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress status messages and logs; errors and the plan itself are still printed
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
