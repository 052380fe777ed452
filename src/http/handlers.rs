//! HTTP request handlers for Recipe Hunter
//!
//! The HTML endpoints (`/`, `/recipe/:id`) render pages and report
//! failures as error pages. The saved-search endpoints speak JSON and
//! convert `RecipeError` through its `IntoResponse` impl.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use axum_extra::extract::{Form, SignedCookieJar};
use serde::Deserialize;

use crate::core::error::{RecipeError, Result};
use crate::core::session::SessionView;
use crate::core::storage::SavedSearchStore;
use crate::core::types::*;
use crate::http::error::status_code;
use crate::http::render::{self, SearchPage};
use crate::http::session::{clear_view, read_view, store_view};
use crate::http::state::AppState;

/// Fields posted by the search form
///
/// `diet` and `intolerances` are checkbox groups and may repeat.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub avoid: String,
    #[serde(default)]
    pub diet: Vec<String>,
    #[serde(default)]
    pub intolerances: Vec<String>,
    #[serde(default)]
    pub search_name: String,
}

impl SearchForm {
    fn into_view(self) -> SessionView {
        let criteria =
            SearchCriteria::from_text(&self.ingredients, &self.avoid, self.diet, self.intolerances);
        SessionView::new(criteria, self.search_name)
    }
}

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Search form, repopulated from the session view
pub async fn index_handler(State(state): State<AppState>, jar: SignedCookieJar) -> Html<String> {
    let view = read_view(&jar);
    Html(search_page(&state, &view, &[], None))
}

/// Run a search from the submitted form
///
/// On success the session view is replaced with the submitted criteria
/// and the results are rendered. On failure the error is shown in place
/// of results with the matching status code and the session cookie is
/// left as it was.
///
/// # Errors
///
/// - `InvalidInput`: no ingredients were submitted (400)
/// - `RemoteService`: the upstream search failed (502)
pub async fn search_handler(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<SearchForm>,
) -> Response {
    let view = form.into_view();

    match run_search(&state, &view).await {
        Ok(recipes) => {
            let html = search_page(&state, &view, &recipes, None);
            (store_view(jar, &view), Html(html)).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Search failed");
            let html = search_page(&state, &view, &[], Some(&e.message()));
            (status_code(&e), Html(html)).into_response()
        }
    }
}

async fn run_search(state: &AppState, view: &SessionView) -> Result<Vec<Recipe>> {
    if view.criteria.ingredients.is_empty() {
        return Err(RecipeError::InvalidInput(
            "Please enter at least one ingredient".to_string(),
        ));
    }

    state.services.gateway.search(&view.criteria).await
}

fn search_page(
    state: &AppState,
    view: &SessionView,
    recipes: &[Recipe],
    error: Option<&str>,
) -> String {
    let config = &state.services.config;

    render::render_search_page(&SearchPage {
        view,
        recipes,
        error,
        options: &config.options,
        summary_chars: config.display.summary_chars,
    })
}

/// Detail page for one recipe
///
/// # Arguments
///
/// * `state` - Shared application state
/// * `id` - Upstream recipe identifier
///
/// # Errors
///
/// Renders an error page with 404 when the recipe does not exist and
/// 502 when either upstream call fails.
pub async fn recipe_detail_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Response {
    match state.services.gateway.recipe_detail(id).await {
        Ok(detail) => Html(render::render_recipe_detail(&detail)).into_response(),
        Err(e) => {
            tracing::warn!(recipe_id = id, error = %e, "Recipe lookup failed");
            let status = status_code(&e);
            let title = if e.is_not_found() {
                "Recipe not found"
            } else {
                "Could not load recipe"
            };
            (status, Html(render::render_error_page(title, &e.message()))).into_response()
        }
    }
}

/// Save the current search under a name
///
/// A blank name is replaced by a generated `New Search <timestamp>`.
/// The returned name is the one the entry was stored under.
pub async fn save_search_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveSearchRequest>,
) -> std::result::Result<Json<SaveSearchResponse>, RecipeError> {
    let saved = state
        .services
        .store
        .save(&req.name, req.criteria, req.recipes)
        .await?;

    Ok(Json(SaveSearchResponse {
        status: "saved".to_string(),
        name: saved.name,
    }))
}

/// All saved searches keyed by name
pub async fn list_saved_searches_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<SavedSearchStore>, RecipeError> {
    Ok(Json(state.services.store.load_all().await?))
}

/// One saved search by name
///
/// # Errors
///
/// - `NotFound`: no search was saved under `name` (404)
pub async fn load_saved_search_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> std::result::Result<Json<SavedSearch>, RecipeError> {
    Ok(Json(state.services.store.load_one(&name).await?))
}

/// Forget the session view
pub async fn clear_session_handler(jar: SignedCookieJar) -> impl IntoResponse {
    (clear_view(jar), StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::core::credentials::Credentials;
    use crate::core::gateway::{GatewayConfig, RecipeGateway};
    use crate::core::services::Services;
    use crate::core::storage::JsonFileStore;
    use axum::extract::FromRef;
    use axum_extra::extract::cookie::Key;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;

    fn test_state(temp_dir: &TempDir) -> AppState {
        let credentials = Credentials {
            api_key: "test-key".to_string(),
            session_secret: "x".repeat(64),
        };
        // Nothing listens on the discard port
        let gateway = RecipeGateway::new(GatewayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            api_key: credentials.api_key.clone(),
            timeout: Duration::from_secs(2),
            page_size: 10,
        })
        .unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("saved.json"));
        let services = Services::with_parts(Config::default(), gateway, Arc::new(store));

        AppState::new(Arc::new(services), &credentials)
    }

    fn empty_jar(state: &AppState) -> SignedCookieJar {
        SignedCookieJar::new(Key::from_ref(state))
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await.into_response();
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_search_without_ingredients_is_bad_request() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);
        let jar = empty_jar(&state);

        let form = SearchForm {
            avoid: "pork".to_string(),
            ..Default::default()
        };
        let response = search_handler(State(state), jar, Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().get("set-cookie").is_none());
    }

    #[tokio::test]
    async fn test_search_upstream_down_keeps_session() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);
        let jar = empty_jar(&state);

        let form = SearchForm {
            ingredients: "chicken".to_string(),
            ..Default::default()
        };
        let response = search_handler(State(state), jar, Form(form)).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert!(response.headers().get("set-cookie").is_none());
    }

    #[tokio::test]
    async fn test_recipe_detail_upstream_down() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let response = recipe_detail_handler(State(state), Path(42)).await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let req = SaveSearchRequest {
            name: "Weeknight".to_string(),
            criteria: SearchCriteria::from_text("chicken, rice", "pork", vec![], vec![]),
            recipes: vec![],
        };
        let saved = save_search_handler(State(state.clone()), Json(req))
            .await
            .unwrap()
            .0;
        assert_eq!(saved.status, "saved");
        assert_eq!(saved.name, "Weeknight");

        let loaded = load_saved_search_handler(State(state.clone()), Path("Weeknight".to_string()))
            .await
            .unwrap()
            .0;
        assert_eq!(loaded.criteria.avoid_text(), "pork");

        let all = list_saved_searches_handler(State(state)).await.unwrap().0;
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_load_unknown_saved_search() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let result = load_saved_search_handler(State(state), Path("missing".to_string())).await;

        match result {
            Err(RecipeError::NotFound(_)) => (),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[tokio::test]
    async fn test_list_saved_searches_empty() {
        let temp_dir = TempDir::new().unwrap();
        let state = test_state(&temp_dir);

        let all = list_saved_searches_handler(State(state)).await.unwrap().0;
        assert!(all.is_empty());
    }
}
