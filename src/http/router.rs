//! Route table for the HTTP adapter.

use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use crate::http::handlers;
use crate::http::middleware::log_request;
use crate::http::state::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.services.config.server.request_timeout_sec);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route(
            "/",
            get(handlers::index_handler).post(handlers::search_handler),
        )
        .route("/recipe/:id", get(handlers::recipe_detail_handler))
        .route("/save_search", post(handlers::save_search_handler))
        .route(
            "/get_saved_searches",
            get(handlers::list_saved_searches_handler),
        )
        .route(
            "/load_saved_search/:name",
            get(handlers::load_saved_search_handler),
        )
        .route("/clear_session", post(handlers::clear_session_handler))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
