//! Error types and error handling for Recipe Hunter.
//!
//! This module defines the error type used throughout the
//! application. Transport-specific handling (HTTP status codes,
//! CLI exit codes) lives in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Recipe Hunter operations
pub type Result<T> = std::result::Result<T, RecipeError>;

/// Main error type for Recipe Hunter
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe service error: {0}")]
    RemoteService(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl RecipeError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, RecipeError::NotFound(_))
    }

    /// Check if the upstream recipe service is to blame
    pub fn is_remote(&self) -> bool {
        matches!(self, RecipeError::RemoteService(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, RecipeError::InvalidInput(_))
    }
}

impl From<reqwest::Error> for RecipeError {
    fn from(err: reqwest::Error) -> Self {
        // Strip the URL: it carries the API key as a query parameter.
        let err = err.without_url();
        if err.is_timeout() {
            RecipeError::RemoteService(format!("request timed out: {err}"))
        } else if err.is_decode() {
            RecipeError::RemoteService(format!("unexpected response shape: {err}"))
        } else {
            RecipeError::RemoteService(err.to_string())
        }
    }
}
