//! Core domain logic (protocol-agnostic)
//!
//! This module contains all business logic that is independent
//! of transport (HTTP, CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **credentials**: API key and session secret loading
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **gateway**: Upstream recipe API client
//! - **storage**: Saved search repository
//! - **session**: Per-user view state
//! - **services**: Unified service container

pub mod config;
pub mod credentials;
pub mod error;
pub mod gateway;
pub mod services;
pub mod session;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use credentials::Credentials;
pub use error::{Result, RecipeError};
pub use services::Services;
