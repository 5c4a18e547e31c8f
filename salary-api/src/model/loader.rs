//! Loading persisted model artifacts.

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Classifier, TreeEnsemble};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read model file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Persisted artifact, tagged by its `format` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
enum ModelDocument {
    TreeEnsemble(TreeEnsemble),
}

/// Summary of the loaded artifact, reported by the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ModelInfo {
    pub path: String,
    pub format: &'static str,
    pub trees: usize,
    pub classes: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

/// A ready classifier plus where it came from.
#[derive(Clone)]
pub struct LoadedModel {
    pub classifier: Arc<dyn Classifier>,
    pub info: ModelInfo,
}

impl std::fmt::Debug for LoadedModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedModel").field("info", &self.info).finish()
    }
}

impl LoadedModel {
    pub fn new(classifier: Arc<dyn Classifier>, path: impl Into<String>) -> Self {
        let info = ModelInfo {
            path: path.into(),
            format: classifier.format(),
            trees: classifier.estimators(),
            classes: classifier.classes().to_vec(),
            loaded_at: Utc::now(),
        };
        Self { classifier, info }
    }
}

/// Read, parse and validate a model artifact.
pub fn load_model(path: impl AsRef<Path>) -> Result<LoadedModel, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: display.clone(),
        source,
    })?;

    let classifier: Arc<dyn Classifier> = match serde_json::from_slice(&bytes)? {
        ModelDocument::TreeEnsemble(ensemble) => {
            ensemble.validate().map_err(LoadError::Invalid)?;
            Arc::new(ensemble)
        }
    };

    Ok(LoadedModel::new(classifier, display))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SINGLE_TREE: &str = r#"{
        "format": "tree_ensemble",
        "feature_names": ["age", "workclass", "fnlwgt", "educational-num",
            "marital-status", "occupation", "relationship", "race", "gender",
            "capital-gain", "capital-loss", "hours-per-week", "native-country"],
        "classes": ["<=50K", ">50K"],
        "trees": [{"nodes": [{"leaf": {"value": [3.0, 1.0]}}]}]
    }"#;

    fn write_artifact(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_artifact() {
        let file = write_artifact(SINGLE_TREE);
        let model = load_model(file.path()).unwrap();
        assert_eq!(model.info.format, "tree_ensemble");
        assert_eq!(model.info.trees, 1);
        assert_eq!(model.info.classes, vec!["<=50K", ">50K"]);
        assert_eq!(model.info.path, file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_model("/nonexistent/best_model.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/best_model.json"));
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        let file = write_artifact(&SINGLE_TREE.replace("tree_ensemble", "pickle"));
        assert!(matches!(load_model(file.path()), Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_structurally_invalid_artifact() {
        let file = write_artifact(&SINGLE_TREE.replace("\"hours-per-week\", ", ""));
        assert!(matches!(load_model(file.path()), Err(LoadError::Invalid(_))));
    }
}
