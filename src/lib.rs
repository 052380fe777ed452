//! Recipe Hunter - ingredient-driven recipe search
//!
//! A small web service that finds recipes through a
//! Spoonacular-compatible API and keeps named searches in a local
//! JSON file.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, credentials, error, types, xdg
//!   - gateway (upstream search and detail calls)
//!   - storage (saved search repository)
//!   - session (per-user view state)
//!   - services (unified service container)
//!
//! - **http**: Web adapter (depends on core)
//!   - handlers, rendering, session cookie, middleware
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Search by ingredients with diet and intolerance filters
//! - Client-side exclusion of recipes whose title names an avoided term
//! - Recipe detail pages (ingredients, summary, instructions)
//! - Named saved searches with a snapshot of the results
//! - Signed session cookie that repopulates the search form

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP adapter
pub mod http;

// CLI adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::credentials::Credentials;
pub use crate::core::error::{RecipeError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
