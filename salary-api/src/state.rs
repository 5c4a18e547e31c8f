//! Shared application state.

use crate::config::Config;
use crate::encoder::EncoderTable;
use crate::model::LoadedModel;

/// Shared application state passed to all handlers.
///
/// Built once before the listener starts and never mutated afterwards.
pub struct AppState {
    pub config: Config,
    pub encoders: EncoderTable,
    /// `None` when the artifact could not be loaded at startup.
    pub model: Option<LoadedModel>,
}

impl AppState {
    pub fn new(config: Config, encoders: EncoderTable, model: Option<LoadedModel>) -> Self {
        Self {
            config,
            encoders,
            model,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}
