//! HTTP client for the upstream recipe API.

use crate::core::config::UpstreamConfig;
use crate::core::error::{Result, RecipeError};
use crate::core::gateway::models::{ComplexSearchResponse, RecipeInformation, RecipeSummary};
use crate::core::gateway::query::{build_search_params, exclude_avoided};
use crate::core::types::{Recipe, RecipeDetail, SearchCriteria};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Longest slice of an upstream error body kept in error messages
const MAX_ERROR_BODY: usize = 200;

/// Gateway configuration
#[derive(Clone)]
pub struct GatewayConfig {
    /// Base URL of the recipe API, without trailing path
    pub base_url: String,
    pub api_key: String,
    /// Per-call timeout
    pub timeout: Duration,
    /// Results requested per search
    pub page_size: usize,
}

impl GatewayConfig {
    pub fn from_upstream(upstream: &UpstreamConfig, api_key: impl Into<String>) -> Self {
        Self {
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(upstream.timeout_sec),
            page_size: upstream.page_size,
        }
    }
}

/// Client for recipe search and detail lookups
pub struct RecipeGateway {
    config: GatewayConfig,
    client: Client,
}

impl RecipeGateway {
    /// Create a new gateway with a bounded request timeout
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RecipeError::ConfigError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Search recipes matching `criteria`
    ///
    /// Full recipe information is requested in the same round trip, so
    /// no per-result detail calls are made. Results whose titles hit an
    /// avoid term are dropped afterwards.
    ///
    /// # Errors
    ///
    /// - `RemoteService`: transport failure, non-2xx status, or a payload
    ///   missing expected fields
    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Recipe>> {
        let params = build_search_params(criteria, self.config.page_size);
        tracing::debug!(params = ?params, "Searching recipes");

        let response: ComplexSearchResponse = self
            .get_json("/recipes/complexSearch", &params, "recipe search", false)
            .await?;

        let candidates: Vec<Recipe> = response.results.into_iter().map(Recipe::from).collect();
        let found = candidates.len();
        let recipes = exclude_avoided(candidates, &criteria.avoid);

        tracing::info!(
            found = found,
            kept = recipes.len(),
            "Recipe search completed"
        );

        Ok(recipes)
    }

    /// Fetch full details for one recipe
    ///
    /// Information and summary are fetched concurrently and both must
    /// succeed; there is no partially populated result. When both fail,
    /// the information error is the one reported.
    ///
    /// # Errors
    ///
    /// - `NotFound`: the information call returned 404
    /// - `RemoteService`: either call failed otherwise, the summary call
    ///   failed in any way, or a payload had an unexpected shape
    pub async fn recipe_detail(&self, id: i64) -> Result<RecipeDetail> {
        let info_path = format!("/recipes/{id}/information");
        let summary_path = format!("/recipes/{id}/summary");

        let (info, summary) = tokio::join!(
            self.get_json::<RecipeInformation>(&info_path, &[], "recipe information", true),
            self.get_json::<RecipeSummary>(&summary_path, &[], "recipe summary", false),
        );

        Ok(info?.into_detail(summary?))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        what: &str,
        missing_is_not_found: bool,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status == StatusCode::NOT_FOUND && missing_is_not_found {
            return Err(RecipeError::NotFound(format!("{what} ({path})")));
        }

        if !status.is_success() {
            tracing::warn!(status = %status.as_u16(), path = %path, "Upstream call failed");
            return Err(RecipeError::RemoteService(format!(
                "{what} failed with HTTP {}: {}",
                status.as_u16(),
                truncate(&text, MAX_ERROR_BODY)
            )));
        }

        serde_json::from_str(&text).map_err(|e| {
            RecipeError::RemoteService(format!("unexpected {what} response: {e}"))
        })
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.trim().chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_config_from_upstream() {
        let upstream = UpstreamConfig {
            base_url: "http://localhost:9000/".to_string(),
            timeout_sec: 3,
            page_size: 7,
            ..Default::default()
        };

        let config = GatewayConfig::from_upstream(&upstream, "key");
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.page_size, 7);
    }

    #[test]
    fn test_truncate_error_body() {
        assert_eq!(truncate("  short  ", 10), "short");
        assert_eq!(truncate(&"x".repeat(500), 200).len(), 200);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_remote_error() {
        let gateway = RecipeGateway::new(GatewayConfig {
            // Port 9 (discard) is not expected to accept HTTP
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: "secret-key".to_string(),
            timeout: Duration::from_secs(2),
            page_size: 10,
        })
        .unwrap();

        let err = gateway
            .search(&SearchCriteria::default())
            .await
            .unwrap_err();
        assert!(err.is_remote());
        assert!(!err.message().contains("secret-key"));
    }
}
