//! Folio CLI - build plans for multi-page front-end projects.
//!
//! This crate provides the command-line interface over `folio-config`: it
//! loads project configuration from files, environment and flags, assembles
//! the mode-specific build plan and checks that the project inputs exist.
//!
//! # Architecture
//!
//! - [`error`] - CLI error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages and plan summaries
//! - `commands` - Individual CLI command implementations
//! - `config` - Layered configuration loading
//!
//! # Example
//!
//! ```rust
//! use folio_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
