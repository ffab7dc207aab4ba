//! Command implementations for the Folio CLI.
//!
//! - [`plan`] - Assemble and print the build plan
//! - [`check`] - Configuration and project input validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod plan;

pub use check::execute as check_execute;
pub use plan::execute as plan_execute;
