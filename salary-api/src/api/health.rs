//! Liveness endpoints.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Greeting returned by the root endpoint.
pub const WELCOME_MESSAGE: &str = "Welcome to the Salary Classification API!";

/// GET / - Static welcome payload.
pub async fn root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// GET /health - Liveness plus model status.
///
/// Always 200: a missing model does not make the process unhealthy.
pub async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let model = state.model.as_ref().map(|m| &m.info);
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "model_loaded": state.model_loaded(),
            "model": model,
        })),
    )
}
