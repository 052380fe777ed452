//! HTTP adapter
//!
//! Depends only on core/. Never imports from cli/.
//!
//! Serves the search page, recipe pages and the saved-search JSON
//! endpoints via the Axum web framework.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod router;
pub mod session;
pub mod state;

pub use handlers::*;
pub use router::build_router;
pub use state::AppState;
