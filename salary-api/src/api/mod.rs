//! HTTP API.

pub mod categories;
pub mod extract;
pub mod health;
pub mod predict;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

/// Build the API router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        .merge(predict::router())
        .merge(categories::router())
}
