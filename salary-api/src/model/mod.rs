//! Model artifact abstraction.
//!
//! This module defines the `Classifier` trait that the request handlers
//! call, the encoded record it consumes, and the loader that turns a
//! persisted artifact into a shared classifier.

mod loader;
mod tree;

pub use loader::{load_model, LoadError, LoadedModel, ModelInfo};
pub use tree::{Node, Tree, TreeEnsemble};

use salary_common::{CategoricalField, Profile};

use crate::encoder::EncoderTable;
use crate::error::Result;

/// Number of model input columns.
pub const N_FEATURES: usize = 13;

/// Column identifiers the model was trained with, in training order.
///
/// Any permutation produces wrong predictions rather than an error, so
/// artifacts declaring a different list are rejected at load time.
pub const FEATURE_COLUMNS: [&str; N_FEATURES] = [
    "age",
    "workclass",
    "fnlwgt",
    "educational-num",
    "marital-status",
    "occupation",
    "relationship",
    "race",
    "gender",
    "capital-gain",
    "capital-loss",
    "hours-per-week",
    "native-country",
];

/// A profile with categoricals replaced by their codes, in column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodedRecord {
    values: [f64; N_FEATURES],
}

impl EncodedRecord {
    pub fn new(values: [f64; N_FEATURES]) -> Self {
        Self { values }
    }

    /// Encode a validated profile. Fails on the first unknown category.
    pub fn from_profile(profile: &Profile, encoders: &EncoderTable) -> Result<Self> {
        let code = |field: CategoricalField| -> Result<f64> {
            encoders
                .encode(field, profile.categorical(field))
                .map(f64::from)
        };

        Ok(Self {
            values: [
                profile.age as f64,
                code(CategoricalField::Workclass)?,
                profile.fnlwgt as f64,
                profile.educational_num as f64,
                code(CategoricalField::MaritalStatus)?,
                code(CategoricalField::Occupation)?,
                code(CategoricalField::Relationship)?,
                code(CategoricalField::Race)?,
                code(CategoricalField::Gender)?,
                profile.capital_gain as f64,
                profile.capital_loss as f64,
                profile.hours_per_week as f64,
                code(CategoricalField::NativeCountry)?,
            ],
        })
    }

    pub fn values(&self) -> &[f64; N_FEATURES] {
        &self.values
    }

    /// Value of a column by its identifier.
    pub fn get(&self, column: &str) -> Option<f64> {
        FEATURE_COLUMNS
            .iter()
            .position(|c| *c == column)
            .map(|idx| self.values[idx])
    }
}

/// A trained classifier that maps an encoded record to a class label.
///
/// Implementations are immutable after loading and shared across requests.
pub trait Classifier: Send + Sync {
    /// Artifact format identifier (e.g., "tree_ensemble").
    fn format(&self) -> &'static str;

    /// Labels the classifier can emit.
    fn classes(&self) -> &[String];

    /// Number of fitted estimators.
    fn estimators(&self) -> usize {
        1
    }

    /// Predict the class label for one record.
    fn predict(&self, record: &EncodedRecord) -> Result<String>;
}
