//! Prediction payloads.

use serde::{Deserialize, Serialize};

/// Label the model emits for the lower salary class.
pub const LOW_INCOME_LABEL: &str = "<=50K";

/// Label the model emits for the higher salary class.
pub const HIGH_INCOME_LABEL: &str = ">50K";

/// Numeric form of a predicted salary class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredictionLabel {
    AtMostThreshold,
    AboveThreshold,
}

impl PredictionLabel {
    /// Collapse a model label into the binary class.
    ///
    /// Only [`LOW_INCOME_LABEL`] maps to 0; any other label maps to 1.
    pub fn from_model_label(label: &str) -> Self {
        if label == LOW_INCOME_LABEL {
            PredictionLabel::AtMostThreshold
        } else {
            PredictionLabel::AboveThreshold
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            PredictionLabel::AtMostThreshold => 0,
            PredictionLabel::AboveThreshold => 1,
        }
    }
}

impl Serialize for PredictionLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for PredictionLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(PredictionLabel::AtMostThreshold),
            1 => Ok(PredictionLabel::AboveThreshold),
            other => Err(serde::de::Error::custom(format!(
                "prediction_label must be 0 or 1, got {}",
                other
            ))),
        }
    }
}

/// Response body of a successful prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    pub prediction_label: PredictionLabel,
}

impl PredictionResponse {
    pub fn new(prediction: String) -> Self {
        let prediction_label = PredictionLabel::from_model_label(&prediction);
        Self {
            prediction,
            prediction_label,
        }
    }
}
