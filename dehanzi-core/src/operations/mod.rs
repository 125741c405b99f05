//! High-level operations that correspond to CLI commands
//!
//! These modules contain the core business logic, separated from CLI
//! concerns like prompting and printing.

pub mod rename;

pub use rename::{check_directory, rename_matching, rename_with_options};
