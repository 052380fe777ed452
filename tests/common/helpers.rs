// Test helper functions

use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Response, Router};
use recipe_hunter::core::config::Config;
use recipe_hunter::core::credentials::Credentials;
use recipe_hunter::core::gateway::{GatewayConfig, RecipeGateway};
use recipe_hunter::core::services::Services;
use recipe_hunter::core::storage::JsonFileStore;
use recipe_hunter::http::{build_router, AppState};
use tempfile::TempDir;

use super::upstream::StubUpstream;

/// Router wired to a stub upstream and a temporary store
#[allow(dead_code)] // Used in integration tests
pub struct TestApp {
    pub router: Router,
    pub upstream: StubUpstream,
    pub temp_dir: TempDir,
}

/// Gateway pointed at `base_url`
#[allow(dead_code)] // Used in integration tests
pub fn create_test_gateway(base_url: &str) -> RecipeGateway {
    RecipeGateway::new(GatewayConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        timeout: Duration::from_secs(5),
        page_size: 10,
    })
    .expect("Failed to build gateway")
}

/// Create a test application with temporary storage
#[allow(dead_code)] // Used in integration tests
pub async fn create_test_app() -> TestApp {
    let upstream = StubUpstream::start().await;
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut config = Config::default();
    config.upstream.base_url = upstream.base_url.clone();
    config.storage.saved_searches_file = temp_dir.path().join("saved_searches.json");

    let credentials = Credentials {
        api_key: "test-api-key".to_string(),
        session_secret: "integration-test-secret-".repeat(3),
    };

    let store = JsonFileStore::new(config.storage.saved_searches_file.clone());
    let gateway = create_test_gateway(&upstream.base_url);
    let services = Services::with_parts(config, gateway, Arc::new(store));
    let router = build_router(AppState::new(Arc::new(services), &credentials));

    TestApp {
        router,
        upstream,
        temp_dir,
    }
}

/// Read a response body as UTF-8 text
#[allow(dead_code)] // Used in integration tests
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

/// Read a response body as JSON
#[allow(dead_code)] // Used in integration tests
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 1_000_000)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
