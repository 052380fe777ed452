//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.
//! Command names mirror the HTTP endpoints they stand in for.

pub mod config;
pub mod recipes;
pub mod saved;

// Re-export argument types for use in mod.rs
pub use config::ConfigArgs;
pub use recipes::{GetRecipeArgs, SearchArgs};
pub use saved::{GetArgs, ListArgs};
