//! Category options endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use salary_common::{CategoricalField, CategoryOptions};

use crate::state::AppState;

/// Build the categories router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}

/// GET /categories - Known options per categorical field, keyed by wire name.
async fn list_categories() -> Json<BTreeMap<&'static str, CategoryOptions>> {
    Json(
        CategoricalField::ALL
            .into_iter()
            .map(|field| (field.wire_name(), CategoryOptions::from(field)))
            .collect(),
    )
}
