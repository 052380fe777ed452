//! Recipe Query Gateway.
//!
//! Talks to a Spoonacular-compatible recipe API and maps its payloads
//! into the domain types in [`crate::core::types`].
//!
//! - **client**: `RecipeGateway`, the HTTP client (search, detail fetch)
//! - **query**: query parameter building and the avoid-term filter
//! - **models**: upstream payload shapes

mod client;
mod models;
mod query;

pub use client::{GatewayConfig, RecipeGateway};
pub use query::{build_search_params, exclude_avoided};
