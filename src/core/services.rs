//! Unified service container for Recipe Hunter
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::gateway::{GatewayConfig, RecipeGateway};
use crate::core::storage::{JsonFileStore, SavedSearchRepository};
use std::sync::Arc;

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Upstream recipe API client
    pub gateway: Arc<RecipeGateway>,

    /// Saved search persistence
    pub store: Arc<dyn SavedSearchRepository>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration and the upstream API key
    pub fn new(config: Config, api_key: &str) -> Result<Self> {
        let gateway = RecipeGateway::new(GatewayConfig::from_upstream(&config.upstream, api_key))?;
        let store = JsonFileStore::new(config.storage.saved_searches_file.clone());

        Ok(Self::with_parts(config, gateway, Arc::new(store)))
    }

    /// Assemble services from already-built parts
    pub fn with_parts(
        config: Config,
        gateway: RecipeGateway,
        store: Arc<dyn SavedSearchRepository>,
    ) -> Self {
        Self {
            gateway: Arc::new(gateway),
            store,
            config: Arc::new(config),
        }
    }
}
