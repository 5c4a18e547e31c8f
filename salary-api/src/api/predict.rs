//! Prediction endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use salary_common::PredictionResponse;

use super::extract::ValidatedProfile;
use crate::error::{Error, Result};
use crate::model::EncodedRecord;
use crate::state::AppState;

/// Build the prediction router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/predict", post(predict))
}

/// POST /predict - Predict the salary class of one profile.
async fn predict(
    State(state): State<Arc<AppState>>,
    ValidatedProfile(profile): ValidatedProfile,
) -> Result<Json<PredictionResponse>> {
    let model = state.model.as_ref().ok_or(Error::ModelNotLoaded)?;

    let record = EncodedRecord::from_profile(&profile, &state.encoders)?;

    // Tree traversal is CPU-bound; keep it off the async workers.
    let classifier = Arc::clone(&model.classifier);
    let label = tokio::task::spawn_blocking(move || classifier.predict(&record))
        .await
        .map_err(|e| Error::InferenceFailed(e.to_string()))??;

    let response = PredictionResponse::new(label);
    tracing::debug!(
        prediction = %response.prediction,
        label = response.prediction_label.as_u8(),
        "Prediction served"
    );

    Ok(Json(response))
}
