//! Request logging for the Recipe Hunter HTTP adapter
//!
//! Each request is logged once it completes, with its matched route
//! (`/recipe/:id`, `/load_saved_search/:name`, ...) alongside the
//! concrete path so recipe ids and search names can be grepped.
//! Health checks are logged at DEBUG to keep probes out of the INFO
//! stream.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, error, info};

/// Path polled by health checks
const HEALTH_PATH: &str = "/health";

/// Request logging middleware
///
/// Unmatched requests (404 from the router itself) log `route` as
/// `-`.
pub async fn log_request(
    matched: Option<MatchedPath>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let route = matched
        .as_ref()
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    if route == HEALTH_PATH && response.status().is_success() {
        debug!(status, duration_ms = %duration_ms, "Health check");
    } else if response.status().is_success() {
        info!(
            method = %method,
            route = %route,
            path = %path,
            status,
            duration_ms = %duration_ms,
            "Request completed"
        );
    } else {
        error!(
            method = %method,
            route = %route,
            path = %path,
            status,
            duration_ms = %duration_ms,
            "Request failed"
        );
    }

    response
}
