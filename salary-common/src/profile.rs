//! Input profile and its range validation.

use serde::{Deserialize, Serialize};

use crate::category::CategoricalField;

/// One individual's attributes, as submitted for prediction.
///
/// Hyphenated names are the wire names. The underscored identifiers are
/// accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: i64,
    pub workclass: String,
    pub fnlwgt: i64,
    #[serde(rename = "educational-num", alias = "educational_num")]
    pub educational_num: i64,
    #[serde(rename = "marital-status", alias = "marital_status")]
    pub marital_status: String,
    pub occupation: String,
    pub relationship: String,
    pub race: String,
    pub gender: String,
    #[serde(rename = "capital-gain", alias = "capital_gain")]
    pub capital_gain: i64,
    #[serde(rename = "capital-loss", alias = "capital_loss")]
    pub capital_loss: i64,
    #[serde(rename = "hours-per-week", alias = "hours_per_week")]
    pub hours_per_week: i64,
    #[serde(rename = "native-country", alias = "native_country")]
    pub native_country: String,
}

/// A single numeric bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    GreaterThan(i64),
    GreaterThanEqual(i64),
    LessThanEqual(i64),
}

impl Bound {
    fn admits(&self, value: i64) -> bool {
        match *self {
            Bound::GreaterThan(limit) => value > limit,
            Bound::GreaterThanEqual(limit) => value >= limit,
            Bound::LessThanEqual(limit) => value <= limit,
        }
    }

    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Bound::GreaterThan(_) => "greater_than",
            Bound::GreaterThanEqual(_) => "greater_than_equal",
            Bound::LessThanEqual(_) => "less_than_equal",
        }
    }
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::GreaterThan(limit) => write!(f, "Input should be greater than {}", limit),
            Bound::GreaterThanEqual(limit) => {
                write!(f, "Input should be greater than or equal to {}", limit)
            }
            Bound::LessThanEqual(limit) => {
                write!(f, "Input should be less than or equal to {}", limit)
            }
        }
    }
}

/// A bound that a profile field failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Wire name of the offending field.
    pub field: &'static str,
    pub value: i64,
    pub bound: Bound,
}

/// Every range violation found in a profile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {} (got {})", v.field, v.bound, v.value))
        .collect::<Vec<_>>()
        .join("; ")
}

const AGE: &[Bound] = &[Bound::GreaterThanEqual(17), Bound::LessThanEqual(90)];
const FNLWGT: &[Bound] = &[Bound::GreaterThan(0)];
const EDUCATIONAL_NUM: &[Bound] = &[Bound::GreaterThanEqual(1), Bound::LessThanEqual(16)];
const NON_NEGATIVE: &[Bound] = &[Bound::GreaterThanEqual(0)];
const HOURS_PER_WEEK: &[Bound] = &[Bound::GreaterThanEqual(1), Bound::LessThanEqual(99)];

impl Profile {
    /// Check every numeric field against its bounds.
    ///
    /// Categorical strings are not checked here; the encoder decides whether
    /// a category is known.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let checks: [(&'static str, i64, &[Bound]); 6] = [
            ("age", self.age, AGE),
            ("fnlwgt", self.fnlwgt, FNLWGT),
            ("educational-num", self.educational_num, EDUCATIONAL_NUM),
            ("capital-gain", self.capital_gain, NON_NEGATIVE),
            ("capital-loss", self.capital_loss, NON_NEGATIVE),
            ("hours-per-week", self.hours_per_week, HOURS_PER_WEEK),
        ];

        let violations: Vec<Violation> = checks
            .into_iter()
            .flat_map(|(field, value, bounds)| {
                bounds
                    .iter()
                    .filter(move |b| !b.admits(value))
                    .map(move |&bound| Violation { field, value, bound })
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }

    /// The raw string submitted for a categorical field.
    pub fn categorical(&self, field: CategoricalField) -> &str {
        match field {
            CategoricalField::Workclass => &self.workclass,
            CategoricalField::MaritalStatus => &self.marital_status,
            CategoricalField::Occupation => &self.occupation,
            CategoricalField::Relationship => &self.relationship,
            CategoricalField::Race => &self.race,
            CategoricalField::Gender => &self.gender,
            CategoricalField::NativeCountry => &self.native_country,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Profile {
        Profile {
            age: 39,
            workclass: "Private".to_string(),
            fnlwgt: 77516,
            educational_num: 13,
            marital_status: "Never-married".to_string(),
            occupation: "Prof-specialty".to_string(),
            relationship: "Not-in-family".to_string(),
            race: "White".to_string(),
            gender: "Male".to_string(),
            capital_gain: 0,
            capital_loss: 0,
            hours_per_week: 40,
            native_country: "United-States".to_string(),
        }
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "age": 39, "workclass": "Private", "fnlwgt": 77516,
            "educational-num": 13, "marital-status": "Never-married",
            "occupation": "Prof-specialty", "relationship": "Not-in-family",
            "race": "White", "gender": "Male", "capital-gain": 0,
            "capital-loss": 0, "hours-per-week": 40,
            "native-country": "United-States"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, sample());
    }

    #[test]
    fn test_deserialize_underscore_aliases() {
        let json = r#"{
            "age": 39, "workclass": "Private", "fnlwgt": 77516,
            "educational_num": 13, "marital_status": "Never-married",
            "occupation": "Prof-specialty", "relationship": "Not-in-family",
            "race": "White", "gender": "Male", "capital_gain": 0,
            "capital_loss": 0, "hours_per_week": 40,
            "native_country": "United-States"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile, sample());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["educational-num"], 13);
        assert_eq!(json["native-country"], "United-States");
        assert!(json.get("hours_per_week").is_none());
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"age": 39, "workclass": "Private"}"#;
        assert!(serde_json::from_str::<Profile>(json).is_err());
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let mut profile = sample();
        profile.age = 17;
        profile.educational_num = 16;
        profile.hours_per_week = 99;
        profile.fnlwgt = 1;
        assert!(profile.validate().is_ok());

        profile.age = 90;
        profile.educational_num = 1;
        profile.hours_per_week = 1;
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let mut profile = sample();
        profile.age = 16;
        profile.fnlwgt = 0;
        profile.capital_loss = -1;
        profile.hours_per_week = 100;

        let err = profile.validate().unwrap_err();
        let fields: Vec<_> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["age", "fnlwgt", "capital-loss", "hours-per-week"]);
        assert_eq!(err.violations[0].bound, Bound::GreaterThanEqual(17));
        assert_eq!(err.violations[1].bound, Bound::GreaterThan(0));
    }

    #[test]
    fn test_error_message_names_fields() {
        let mut profile = sample();
        profile.educational_num = 0;
        let message = profile.validate().unwrap_err().to_string();
        assert!(message.contains("educational-num"));
        assert!(message.contains("greater than or equal to 1"));
    }

    #[test]
    fn test_categorical_accessor() {
        let profile = sample();
        assert_eq!(profile.categorical(CategoricalField::Gender), "Male");
        assert_eq!(
            profile.categorical(CategoricalField::NativeCountry),
            "United-States"
        );
    }
}
