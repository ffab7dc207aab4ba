//! Configuration system for the CLI with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod loading;
mod overrides;

pub use loading::{ENV_PREFIX, ENV_SEPARATOR, load, load_pages, locate_source, project_root};
pub use overrides::{plan_overrides, project_overrides};
