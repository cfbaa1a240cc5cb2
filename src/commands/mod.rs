//! Command implementations for the CLI.

pub mod clean;
pub mod completions;
pub mod mirrors;
pub mod resolve;
