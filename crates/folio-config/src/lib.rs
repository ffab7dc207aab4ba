//! Build plan assembly for multi-page front-end projects.
//!
//! Turns a list of pages into a complete, mode-specialized plan for an
//! external bundler: entries, one generated document per page, shared-chunk
//! rules, loader rules and an ordered list of side effects.

pub mod config;
pub mod dev;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod layout;
pub mod loaders;
pub mod merge;
pub mod mode;
pub mod page;
pub mod pattern;
pub mod plan;
pub mod plugin;
pub mod split;
pub mod validation;

// Re-export main types
pub use config::*;
pub use dev::*;
pub use entry::*;
pub use error::*;
pub use layout::*;
pub use loaders::{LoaderSpec, ModuleRule, default_module_rules};
pub use mode::*;
pub use page::*;
pub use pattern::Pattern;
pub use plan::*;
pub use plugin::SideEffect;
pub use split::*;

// Re-export discovery and validation
pub use discovery::{ConfigDiscovery, ConfigSource, discover};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
