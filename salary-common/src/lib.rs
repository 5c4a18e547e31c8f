//! Salary Classifier Common Types
//!
//! Wire types shared by the prediction service and its clients.

pub mod category;
pub mod prediction;
pub mod profile;

pub use category::{CategoricalField, CategoryOptions, CATCH_ALL, UNKNOWN_MARKER};
pub use prediction::{PredictionLabel, PredictionResponse, HIGH_INCOME_LABEL, LOW_INCOME_LABEL};
pub use profile::{Bound, Profile, ValidationError, Violation};
