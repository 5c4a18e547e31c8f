//! Tree-ensemble classifier.

use serde::Deserialize;

use super::{Classifier, EncodedRecord, FEATURE_COLUMNS, N_FEATURES};
use crate::error::{Error, Result};

/// One node of a fitted decision tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Rows with `x[feature] <= threshold` go left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Per-class weights (counts or probabilities).
    Leaf { value: Vec<f64> },
}

/// A decision tree stored as a flat node array rooted at index 0.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    pub nodes: Vec<Node>,
}

impl Tree {
    fn leaf_for(&self, x: &[f64; N_FEATURES]) -> Option<&[f64]> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx)? {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if *x.get(*feature)? <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                Node::Leaf { value } => return Some(value.as_slice()),
            }
        }
    }

    fn check(&self, n_classes: usize) -> std::result::Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match node {
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= N_FEATURES {
                        return Err(format!("node {} splits on unknown feature {}", idx, feature));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {} has a non-finite threshold", idx));
                    }
                    for child in [*left, *right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!("node {} has invalid child {}", idx, child));
                        }
                    }
                }
                Node::Leaf { value } => {
                    if value.len() != n_classes {
                        return Err(format!(
                            "leaf {} has {} weights, expected {}",
                            idx,
                            value.len(),
                            n_classes
                        ));
                    }
                    if value.iter().any(|w| !w.is_finite() || *w < 0.0) {
                        return Err(format!("leaf {} has a negative or non-finite weight", idx));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Averaged ensemble of decision trees (a single tree is a plain decision tree).
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsemble {
    pub feature_names: Vec<String>,
    pub classes: Vec<String>,
    pub trees: Vec<Tree>,
}

impl TreeEnsemble {
    /// Check the structural invariants the predictor relies on.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.feature_names.len() != N_FEATURES
            || self
                .feature_names
                .iter()
                .zip(FEATURE_COLUMNS)
                .any(|(name, expected)| name != expected)
        {
            return Err(format!(
                "feature_names {:?} do not match the expected columns {:?}",
                self.feature_names, FEATURE_COLUMNS
            ));
        }
        if self.classes.is_empty() {
            return Err("classes is empty".to_string());
        }
        if self.trees.is_empty() {
            return Err("ensemble has no trees".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.check(self.classes.len())
                .map_err(|e| format!("tree {}: {}", i, e))?;
        }
        Ok(())
    }

    /// Mean of the normalized leaf weights reached in each tree.
    pub fn predict_proba(&self, record: &EncodedRecord) -> Result<Vec<f64>> {
        let mut totals = vec![0.0; self.classes.len()];
        for (i, tree) in self.trees.iter().enumerate() {
            let leaf = tree.leaf_for(record.values()).ok_or_else(|| {
                Error::InferenceFailed(format!("tree {} did not reach a leaf", i))
            })?;
            let sum: f64 = leaf.iter().sum();
            if sum > 0.0 {
                for (total, weight) in totals.iter_mut().zip(leaf) {
                    *total += weight / sum;
                }
            }
        }

        let n = self.trees.len() as f64;
        Ok(totals.into_iter().map(|t| t / n).collect())
    }
}

impl Classifier for TreeEnsemble {
    fn format(&self) -> &'static str {
        "tree_ensemble"
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn estimators(&self) -> usize {
        self.trees.len()
    }

    fn predict(&self, record: &EncodedRecord) -> Result<String> {
        let proba = self.predict_proba(record)?;

        // First class wins ties.
        let mut best = 0;
        for (idx, p) in proba.iter().enumerate().skip(1) {
            if *p > proba[best] {
                best = idx;
            }
        }

        self.classes
            .get(best)
            .cloned()
            .ok_or_else(|| Error::InferenceFailed("no class selected".to_string()))
    }
}
