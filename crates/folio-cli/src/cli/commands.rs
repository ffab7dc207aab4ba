use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Folio subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble the build plan for a mode
    ///
    /// Resolves one entry and one HTML document per page, applies the
    /// production or development overlay and prints the plan as JSON.
    Plan(PlanArgs),

    /// Validate configuration and project inputs
    ///
    /// Checks the page list and path settings, then confirms that every
    /// entry module, the template, the favicon and the theme files exist.
    Check(CheckArgs),
}

/// Options that locate the project and its configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root directory (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of discovering folio.toml or package.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file listing the pages, replacing any pages from config
    ///
    /// Example content: [{"name": "home", "title": "Home"}]
    #[arg(long, value_name = "FILE")]
    pub pages: Option<PathBuf>,

    /// Output directory for bundled files
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for the plan command
#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Build mode: production or development
    ///
    /// Other names pass the base plan through unchanged unless --strict is set.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Write the plan to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reject build modes other than production and development
    #[arg(long)]
    pub strict: bool,

    /// Development server port
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Do not open a browser when the development server starts
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Only validate the configuration, skip filesystem checks
    #[arg(long)]
    pub schema_only: bool,
}
