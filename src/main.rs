//! Recipe Hunter HTTP server entry point
//!
//! Starts the web UI and saved-search API.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use recipe_hunter::core::config::Config;
use recipe_hunter::core::credentials::Credentials;
use recipe_hunter::core::services::Services;
use recipe_hunter::core::xdg::XdgDirs;
use recipe_hunter::http::{build_router, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recipe_hunter=info,tower_http=info".into());
    let json = std::env::var("RECIPE_HUNTER_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Recipe Hunter");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.log_paths();
    xdg.ensure_dirs_exist()?;

    // Load configuration
    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    // Missing or weak secrets are fatal
    let credentials = match Credentials::load(&config.upstream.credentials_file) {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!("{e}");
            return Err(e.into());
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);

    // Create shared services
    let services = Arc::new(Services::new(config, &credentials.api_key)?);
    let app = build_router(AppState::new(services, &credentials));

    // Bind to address and start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
