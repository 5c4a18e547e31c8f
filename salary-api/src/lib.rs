//! Salary Classification API - serves a trained salary-class model over HTTP.

pub mod api;
pub mod config;
pub mod encoder;
pub mod error;
pub mod logging;
pub mod model;
pub mod state;

use std::sync::Arc;

use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use encoder::EncoderTable;
pub use error::{Error, Result};
pub use state::AppState;

/// Build the full application router with middleware.
pub fn app(state: Arc<AppState>) -> Router {
    api::router()
        .layer(middleware::from_fn(logging::request_logger))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Load the model artifact named in the config.
///
/// A missing or invalid artifact is logged and yields `None`; the service
/// still starts and answers every prediction with "Model not loaded.".
pub fn load_configured_model(config: &Config) -> Option<model::LoadedModel> {
    match model::load_model(&config.model.path) {
        Ok(loaded) => {
            tracing::info!(
                "Model loaded from {} ({} trees, classes {:?})",
                loaded.info.path,
                loaded.info.trees,
                loaded.info.classes
            );
            Some(loaded)
        }
        Err(e) => {
            tracing::error!("Model unavailable: {}", e);
            None
        }
    }
}
