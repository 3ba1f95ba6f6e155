use axum::extract::{DefaultBodyLimit, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::{ai, AppState};

mod greeting;

use greeting::*;

/// Largest request body accepted; anything bigger is answered as invalid input.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_only))
        .route("/generate-greeting", post(generate_greeting))
        .route("/retrieve-greeting", get(retrieve_greeting))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

fn health_data(state: &AppState) -> serde_json::Value {
    serde_json::json!({
        "name": "greetcard",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.started_at.elapsed().as_secs(),
        "model": ai::MODEL,
        "has_greeting": !state.last_greeting.is_empty(),
    })
}

/// GET / — health data + endpoint list.
async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    let mut data = health_data(&state);
    if let Some(obj) = data.as_object_mut() {
        obj.insert("endpoints".to_string(), serde_json::json!({
            "GET /": "index with health data + endpoint list",
            "GET /health": "health only",
            "POST /generate-greeting": "generate a greeting (body: {input: \"...\"})",
            "GET /retrieve-greeting": "last generated greeting",
        }));
    }
    Json(data)
}

async fn health_only(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(health_data(&state))
}
