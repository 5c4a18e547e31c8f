//! Categorical profile fields and their known options.

use serde::{Deserialize, Serialize};

/// The categorical columns of a profile.
///
/// Each field has a fixed option list. The lists are in presentation order;
/// encoders derive their own ordering from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoricalField {
    Workclass,
    MaritalStatus,
    Occupation,
    Relationship,
    Race,
    Gender,
    NativeCountry,
}

/// Catch-all category that unknown markers are folded into.
pub const CATCH_ALL: &str = "Others";

/// Marker used by the source data for a missing categorical value.
pub const UNKNOWN_MARKER: &str = "?";

const WORKCLASS: &[&str] = &[
    "Private",
    "Self-emp-not-inc",
    "Local-gov",
    "Others",
    "State-gov",
    "Self-emp-inc",
    "Federal-gov",
];

const MARITAL_STATUS: &[&str] = &[
    "Never-married",
    "Married-civ-spouse",
    "Divorced",
    "Married-spouse-absent",
    "Separated",
    "Married-AF-spouse",
    "Widowed",
];

const OCCUPATION: &[&str] = &[
    "Prof-specialty",
    "Craft-repair",
    "Exec-managerial",
    "Adm-clerical",
    "Sales",
    "Other-service",
    "Machine-op-inspct",
    "Others",
    "Transport-moving",
    "Handlers-cleaners",
    "Farming-fishing",
    "Tech-support",
    "Protective-serv",
    "Priv-house-serv",
    "Armed-Forces",
];

const RELATIONSHIP: &[&str] = &[
    "Husband",
    "Not-in-family",
    "Own-child",
    "Unmarried",
    "Wife",
    "Other-relative",
];

const RACE: &[&str] = &[
    "White",
    "Black",
    "Asian-Pac-Islander",
    "Amer-Indian-Eskimo",
    "Other",
];

const GENDER: &[&str] = &["Male", "Female"];

const NATIVE_COUNTRY: &[&str] = &[
    "United-States",
    "Cuba",
    "Jamaica",
    "India",
    "Mexico",
    "South",
    "Puerto-Rico",
    "Honduras",
    "England",
    "Canada",
    "Germany",
    "Iran",
    "Philippines",
    "Poland",
    "Columbia",
    "Cambodia",
    "Thailand",
    "Ecuador",
    "Laos",
    "Taiwan",
    "Haiti",
    "Portugal",
    "Dominican-Republic",
    "El-Salvador",
    "France",
    "Guatemala",
    "Italy",
    "China",
    "Japan",
    "Yugoslavia",
    "Peru",
    "Outlying-US(Guam-USVI-etc)",
    "Scotland",
    "Trinidad&Tobago",
    "Greece",
    "Nicaragua",
    "Vietnam",
    "Hong",
    "Ireland",
    "Hungary",
    "Holland-Netherlands",
];

impl CategoricalField {
    /// All categorical fields, in model column order.
    pub const ALL: [CategoricalField; 7] = [
        CategoricalField::Workclass,
        CategoricalField::MaritalStatus,
        CategoricalField::Occupation,
        CategoricalField::Relationship,
        CategoricalField::Race,
        CategoricalField::Gender,
        CategoricalField::NativeCountry,
    ];

    /// Internal identifier (underscored).
    pub fn name(&self) -> &'static str {
        match self {
            CategoricalField::Workclass => "workclass",
            CategoricalField::MaritalStatus => "marital_status",
            CategoricalField::Occupation => "occupation",
            CategoricalField::Relationship => "relationship",
            CategoricalField::Race => "race",
            CategoricalField::Gender => "gender",
            CategoricalField::NativeCountry => "native_country",
        }
    }

    /// Name used on the wire and as the model column identifier.
    pub fn wire_name(&self) -> &'static str {
        match self {
            CategoricalField::MaritalStatus => "marital-status",
            CategoricalField::NativeCountry => "native-country",
            other => other.name(),
        }
    }

    /// Human-readable label for form rendering.
    pub fn label(&self) -> &'static str {
        match self {
            CategoricalField::Workclass => "Workclass",
            CategoricalField::MaritalStatus => "Marital Status",
            CategoricalField::Occupation => "Occupation",
            CategoricalField::Relationship => "Relationship",
            CategoricalField::Race => "Race",
            CategoricalField::Gender => "Gender",
            CategoricalField::NativeCountry => "Native Country",
        }
    }

    /// Known options in presentation order.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            CategoricalField::Workclass => WORKCLASS,
            CategoricalField::MaritalStatus => MARITAL_STATUS,
            CategoricalField::Occupation => OCCUPATION,
            CategoricalField::Relationship => RELATIONSHIP,
            CategoricalField::Race => RACE,
            CategoricalField::Gender => GENDER,
            CategoricalField::NativeCountry => NATIVE_COUNTRY,
        }
    }
}

impl std::fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Option list for one field, as served to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOptions {
    pub label: String,
    pub options: Vec<String>,
}

impl From<CategoricalField> for CategoryOptions {
    fn from(field: CategoricalField) -> Self {
        Self {
            label: field.label().to_string(),
            options: field.options().iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_serialization_uses_wire_name() {
        for field in CategoricalField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.wire_name()));
        }
    }

    #[test]
    fn test_option_counts() {
        assert_eq!(CategoricalField::Workclass.options().len(), 7);
        assert_eq!(CategoricalField::MaritalStatus.options().len(), 7);
        assert_eq!(CategoricalField::Occupation.options().len(), 15);
        assert_eq!(CategoricalField::Relationship.options().len(), 6);
        assert_eq!(CategoricalField::Race.options().len(), 5);
        assert_eq!(CategoricalField::Gender.options().len(), 2);
        assert_eq!(CategoricalField::NativeCountry.options().len(), 41);
    }

    #[test]
    fn test_catch_all_only_where_trained() {
        let with_catch_all: Vec<_> = CategoricalField::ALL
            .into_iter()
            .filter(|f| f.options().contains(&CATCH_ALL))
            .collect();
        assert_eq!(
            with_catch_all,
            vec![CategoricalField::Workclass, CategoricalField::Occupation]
        );
    }

    #[test]
    fn test_options_have_no_duplicates() {
        for field in CategoricalField::ALL {
            let mut sorted = field.options().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), field.options().len(), "{}", field);
        }
    }
}
