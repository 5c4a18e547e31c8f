//! Label encoding of categorical profile fields.
//!
//! Each encoder is fitted from a field's option list the same way the
//! training preprocessing fitted its label encoders: the distinct options
//! sorted by code point, a value's code being its position in that order.

use std::collections::HashMap;

use salary_common::{CategoricalField, CATCH_ALL, UNKNOWN_MARKER};

use crate::error::{Error, Result};

#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    #[error("No categories given for field '{0}'")]
    Empty(CategoricalField),

    #[error("Field '{0}' has no encoder")]
    Missing(CategoricalField),
}

/// Fitted string → integer mapping for one field.
#[derive(Debug, Clone)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn fit<I, S>(options: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = options.into_iter().map(Into::into).collect();
        if classes.is_empty() {
            return None;
        }
        classes.sort_unstable();
        classes.dedup();
        Some(Self { classes })
    }

    /// Fitted classes, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn transform(&self, value: &str) -> Option<u32> {
        self.classes
            .binary_search_by(|class| class.as_str().cmp(value))
            .ok()
            .map(|idx| idx as u32)
    }
}

/// Encoders for every categorical field, built once at startup.
#[derive(Debug, Clone)]
pub struct EncoderTable {
    encoders: HashMap<CategoricalField, LabelEncoder>,
}

impl EncoderTable {
    /// Fit an encoder for every field from the built-in option tables.
    pub fn from_defaults() -> std::result::Result<Self, EncoderError> {
        Self::build(
            CategoricalField::ALL
                .into_iter()
                .map(|field| (field, field.options().to_vec())),
        )
    }

    pub fn build<I>(options: I) -> std::result::Result<Self, EncoderError>
    where
        I: IntoIterator<Item = (CategoricalField, Vec<&'static str>)>,
    {
        let mut encoders = HashMap::new();
        for (field, values) in options {
            let encoder = LabelEncoder::fit(values).ok_or(EncoderError::Empty(field))?;
            encoders.insert(field, encoder);
        }

        for field in CategoricalField::ALL {
            if !encoders.contains_key(&field) {
                return Err(EncoderError::Missing(field));
            }
        }

        Ok(Self { encoders })
    }

    /// Encode one categorical value.
    ///
    /// `"?"` is looked up as `"Others"`. Unknown values are a client error
    /// reporting the value that was actually looked up.
    pub fn encode(&self, field: CategoricalField, value: &str) -> Result<u32> {
        let value = if value == UNKNOWN_MARKER {
            CATCH_ALL
        } else {
            value
        };

        self.encoders
            .get(&field)
            .and_then(|encoder| encoder.transform(value))
            .ok_or_else(|| Error::InvalidCategory {
                field,
                value: value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EncoderTable {
        EncoderTable::from_defaults().unwrap()
    }

    #[test]
    fn test_fit_sorts_and_dedups() {
        let encoder = LabelEncoder::fit(["b", "a", "c", "a"]).unwrap();
        assert_eq!(encoder.classes(), &["a", "b", "c"]);
        assert_eq!(encoder.transform("a"), Some(0));
        assert_eq!(encoder.transform("c"), Some(2));
        assert_eq!(encoder.transform("d"), None);
    }

    #[test]
    fn test_fit_empty_is_none() {
        assert!(LabelEncoder::fit(Vec::<String>::new()).is_none());
    }

    #[test]
    fn test_codes_follow_sorted_order() {
        let table = table();
        // Sorted: Federal-gov, Local-gov, Others, Private, Self-emp-inc, Self-emp-not-inc, State-gov
        assert_eq!(table.encode(CategoricalField::Workclass, "Federal-gov").unwrap(), 0);
        assert_eq!(table.encode(CategoricalField::Workclass, "Private").unwrap(), 3);
        assert_eq!(table.encode(CategoricalField::Workclass, "State-gov").unwrap(), 6);
        assert_eq!(table.encode(CategoricalField::Gender, "Female").unwrap(), 0);
        assert_eq!(table.encode(CategoricalField::Gender, "Male").unwrap(), 1);
    }

    #[test]
    fn test_every_option_encodes_within_range() {
        let table = table();
        for field in CategoricalField::ALL {
            let n = field.options().len() as u32;
            let mut codes: Vec<u32> = field
                .options()
                .iter()
                .map(|opt| table.encode(field, opt).unwrap())
                .collect();
            codes.sort_unstable();
            assert_eq!(codes, (0..n).collect::<Vec<_>>(), "{}", field);
        }
    }

    #[test]
    fn test_unknown_marker_maps_to_catch_all() {
        let table = table();
        for field in [CategoricalField::Workclass, CategoricalField::Occupation] {
            assert_eq!(
                table.encode(field, "?").unwrap(),
                table.encode(field, "Others").unwrap()
            );
        }
    }

    #[test]
    fn test_unknown_marker_without_catch_all_fails_like_others() {
        let table = table();
        let err = table.encode(CategoricalField::Race, "?").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidCategory { field: CategoricalField::Race, ref value } if value == "Others"
        ));
    }

    #[test]
    fn test_unknown_value_names_field() {
        let err = table()
            .encode(CategoricalField::Workclass, "Unknown-Value")
            .unwrap_err();
        assert!(err.to_string().contains("workclass"));
        assert!(err.to_string().contains("Unknown-Value"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(table().encode(CategoricalField::Gender, "male").is_err());
    }

    #[test]
    fn test_build_rejects_empty_field() {
        let err = EncoderTable::build(
            CategoricalField::ALL
                .into_iter()
                .map(|f| (f, if f == CategoricalField::Race { vec![] } else { f.options().to_vec() })),
        )
        .unwrap_err();
        assert!(matches!(err, EncoderError::Empty(CategoricalField::Race)));
    }

    #[test]
    fn test_build_rejects_missing_field() {
        let err = EncoderTable::build([(CategoricalField::Gender, vec!["Male", "Female"])])
            .unwrap_err();
        assert!(matches!(err, EncoderError::Missing(_)));
    }
}
