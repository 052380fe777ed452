//! Application state for the HTTP adapter
//!
//! Wraps the shared core services together with the cookie signing
//! key derived from the configured session secret.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::core::credentials::Credentials;
use crate::core::services::Services;

/// Shared application state for Axum handlers
#[derive(Clone)]
pub struct AppState {
    /// Core services (gateway, store, config)
    pub services: Arc<Services>,

    /// Signs the session cookie; stable across restarts
    cookie_key: Key,
}

impl AppState {
    /// Create state from services and the loaded credentials
    ///
    /// The session secret must already be validated to be at least 32
    /// bytes long (see [`Credentials::load`]).
    pub fn new(services: Arc<Services>, credentials: &Credentials) -> Self {
        Self {
            services,
            cookie_key: Key::derive_from(credentials.session_secret.as_bytes()),
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
