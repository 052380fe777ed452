// Stub recipe API served on a random local port
//
// Recipe ids with fixed behaviour:
//   101  Pork Fried Rice (search only)
//   102  Chicken and Rice Bowl (information + summary)
//   103  information succeeds, summary returns 500
//   104  information returns a payload missing required fields
//   105  information succeeds, summary returns 404
//   106  information returns 404, summary returns 500
//   anything else: 404 from both detail routes

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

pub const PORK_FRIED_RICE: i64 = 101;
pub const CHICKEN_RICE_BOWL: i64 = 102;
pub const SUMMARY_FAILS: i64 = 103;
pub const MALFORMED_INFO: i64 = 104;
pub const SUMMARY_MISSING: i64 = 105;
pub const INFO_MISSING_SUMMARY_FAILS: i64 = 106;

#[derive(Clone, Default)]
struct StubState {
    search_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
    search_status: Arc<Mutex<Option<StatusCode>>>,
}

/// Running stub server
pub struct StubUpstream {
    pub base_url: String,
    state: StubState,
}

impl StubUpstream {
    pub async fn start() -> Self {
        let state = StubState::default();

        let app = Router::new()
            .route("/recipes/complexSearch", get(complex_search))
            .route("/recipes/:id/information", get(information))
            .route("/recipes/:id/summary", get(summary))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Query parameters of every search received so far
    #[allow(dead_code)]
    pub fn search_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.search_queries.lock().unwrap().clone()
    }

    /// Make every subsequent search fail with `status`
    #[allow(dead_code)]
    pub fn fail_searches_with(&self, status: StatusCode) {
        *self.state.search_status.lock().unwrap() = Some(status);
    }
}

async fn complex_search(
    State(state): State<StubState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.search_queries.lock().unwrap().push(params);

    if let Some(status) = *state.search_status.lock().unwrap() {
        return (status, "upstream exploded").into_response();
    }

    Json(json!({
        "results": [
            {
                "id": PORK_FRIED_RICE,
                "title": "Pork Fried Rice",
                "summary": "Leftover rice and <b>pork</b>."
            },
            {
                "id": CHICKEN_RICE_BOWL,
                "title": "Chicken and Rice Bowl",
                "summary": "A <b>fast</b> weeknight dinner."
            }
        ],
        "offset": 0,
        "number": 2,
        "totalResults": 2
    }))
    .into_response()
}

async fn information(Path(id): Path<i64>) -> Response {
    match id {
        CHICKEN_RICE_BOWL | SUMMARY_FAILS | SUMMARY_MISSING => Json(json!({
            "id": id,
            "title": "Chicken and Rice Bowl",
            "extendedIngredients": [
                { "original": "2 chicken breasts" },
                { "original": "1 cup rice" }
            ],
            "instructions": "<ol><li>Cook the rice.</li><li>Grill the chicken.</li></ol>",
            "sourceUrl": "https://example.com/chicken-rice-bowl"
        }))
        .into_response(),
        MALFORMED_INFO => Json(json!({ "id": id, "name": "no title here" })).into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({ "status": "failure" }))).into_response(),
    }
}

async fn summary(Path(id): Path<i64>) -> Response {
    match id {
        CHICKEN_RICE_BOWL | MALFORMED_INFO => Json(json!({
            "id": id,
            "title": "Chicken and Rice Bowl",
            "summary": "A <b>fast</b> weeknight dinner."
        }))
        .into_response(),
        SUMMARY_FAILS | INFO_MISSING_SUMMARY_FAILS => {
            (StatusCode::INTERNAL_SERVER_ERROR, "summary unavailable").into_response()
        }
        _ => (StatusCode::NOT_FOUND, Json(json!({ "status": "failure" }))).into_response(),
    }
}
