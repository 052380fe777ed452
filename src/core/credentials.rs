//! Secrets loaded once at startup.
//!
//! The upstream API key and the cookie signing secret come from a
//! `key=value` env file, with `RECIPE_HUNTER_API_KEY` and
//! `RECIPE_HUNTER_SESSION_SECRET` taking priority when set. Missing
//! values are fatal: the server refuses to start without them.

use crate::core::error::{Result, RecipeError};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

/// Minimum length of the cookie signing secret in bytes
pub const MIN_SESSION_SECRET_LEN: usize = 32;

const API_KEY: &str = "API_KEY";
const SESSION_SECRET: &str = "SESSION_SECRET";

/// Upstream API key and session signing secret
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub session_secret: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Load credentials from the env file at `path`, then apply
    /// environment overrides
    ///
    /// The file may be absent when both values come from the
    /// environment.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let values = read_values(path)?;
        Self::from_values(&values, path)
    }

    /// Load only the upstream API key
    ///
    /// Used by tools that call the recipe API but never sign cookies.
    pub fn load_api_key(path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let values = read_values(path)?;
        api_key_from(&values, path)
    }

    fn from_values(values: &HashMap<String, String>, path: &Path) -> Result<Self> {
        let api_key = api_key_from(values, path)?;

        let session_secret = values.get(SESSION_SECRET).cloned().ok_or_else(|| {
            RecipeError::ConfigError(format!(
                "{SESSION_SECRET} not found in {} or RECIPE_HUNTER_SESSION_SECRET",
                path.display()
            ))
        })?;

        if session_secret.len() < MIN_SESSION_SECRET_LEN {
            return Err(RecipeError::ConfigError(format!(
                "{SESSION_SECRET} must be at least {MIN_SESSION_SECRET_LEN} bytes"
            )));
        }

        Ok(Self {
            api_key,
            session_secret,
        })
    }
}

fn read_values(path: &Path) -> Result<HashMap<String, String>> {
    let mut values = if path.exists() {
        let contents = fs::read_to_string(path).map_err(|e| {
            RecipeError::ConfigError(format!(
                "Failed to read credentials file {}: {e}",
                path.display()
            ))
        })?;
        parse_env_file(&contents)
    } else {
        tracing::debug!("Credentials file {:?} not found", path);
        HashMap::new()
    };

    if let Ok(key) = env::var("RECIPE_HUNTER_API_KEY") {
        values.insert(API_KEY.to_string(), key);
    }
    if let Ok(secret) = env::var("RECIPE_HUNTER_SESSION_SECRET") {
        values.insert(SESSION_SECRET.to_string(), secret);
    }

    Ok(values)
}

fn api_key_from(values: &HashMap<String, String>, path: &Path) -> Result<String> {
    values
        .get(API_KEY)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| {
            RecipeError::ConfigError(format!(
                "{API_KEY} not found in {} or RECIPE_HUNTER_API_KEY",
                path.display()
            ))
        })
}

/// Parse `key=value` lines, skipping blanks and `#` comments.
/// Values may be wrapped in single or double quotes.
pub fn parse_env_file(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            Some((key.trim().to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
