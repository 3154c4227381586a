//! JSON tree ensembles standing in for trained forest models.

mod tree;

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

pub use tree::{Node, Tree};

use crate::error::ModelError;
use crate::traits::{Classifier, Regressor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnsembleKind {
    Classifier,
    Regressor,
}

impl EnsembleKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classifier => "classifier",
            Self::Regressor => "regressor",
        }
    }
}

/// On-disk model artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsembleArtifact {
    pub kind: EnsembleKind,
    #[serde(default)]
    pub name: Option<String>,
    pub n_features: usize,
    #[serde(default)]
    pub classes: Vec<i64>,
    pub trees: Vec<Tree>,
    /// Per-tree weights; equal weighting when absent.
    #[serde(default)]
    pub weights: Option<Vec<f64>>,
}

impl EnsembleArtifact {
    pub fn from_json_str(raw: &str) -> Result<Self, ModelError> {
        let artifact: Self = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_json_str(&raw)?;
        debug!(
            path = %path.display(),
            kind = artifact.kind.as_str(),
            trees = artifact.trees.len(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| match self.kind {
            EnsembleKind::Classifier => "RandomForestClassifier".to_string(),
            EnsembleKind::Regressor => "RandomForestRegressor".to_string(),
        })
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.n_features == 0 {
            return Err(ModelError::Invalid("n_features must be positive".into()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("ensemble has no trees".into()));
        }
        if let Some(weights) = &self.weights {
            if weights.len() != self.trees.len() {
                return Err(ModelError::Invalid(format!(
                    "{} weights for {} trees",
                    weights.len(),
                    self.trees.len()
                )));
            }
            if weights.iter().any(|w| !w.is_finite() || *w < 0.0)
                || weights.iter().sum::<f64>() <= 0.0
            {
                return Err(ModelError::Invalid(
                    "weights must be non-negative with a positive sum".into(),
                ));
            }
        }
        let leaf_width = match self.kind {
            EnsembleKind::Classifier => {
                if self.classes.len() < 2 {
                    return Err(ModelError::Invalid(
                        "classifier needs at least two classes".into(),
                    ));
                }
                self.classes.len()
            }
            EnsembleKind::Regressor => 1,
        };
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(i, self.n_features, leaf_width)?;
        }
        Ok(())
    }

    fn check_width(&self, features: &[f64]) -> Result<(), ModelError> {
        if features.len() == self.n_features {
            Ok(())
        } else {
            Err(ModelError::FeatureCount {
                expected: self.n_features,
                actual: features.len(),
            })
        }
    }

    fn weight(&self, tree: usize) -> f64 {
        self.weights
            .as_ref()
            .and_then(|w| w.get(tree).copied())
            .unwrap_or(1.0)
    }

    #[allow(clippy::cast_precision_loss)]
    fn total_weight(&self) -> f64 {
        self.weights
            .as_ref()
            .map_or_else(|| self.trees.len() as f64, |w| w.iter().sum())
    }

    fn expect_kind(self, kind: EnsembleKind) -> Result<Self, ModelError> {
        if self.kind == kind {
            Ok(self)
        } else {
            Err(ModelError::WrongKind {
                expected: kind.as_str(),
                actual: self.kind.as_str(),
            })
        }
    }
}

/// Forest of class-vote trees. Each leaf holds per-class weights which are
/// normalized before averaging across trees.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    name: String,
    artifact: EnsembleArtifact,
}

impl ForestClassifier {
    pub fn new(artifact: EnsembleArtifact) -> Result<Self, ModelError> {
        let artifact = artifact.expect_kind(EnsembleKind::Classifier)?;
        Ok(Self {
            name: artifact.display_name(),
            artifact,
        })
    }

    pub fn classes(&self) -> &[i64] {
        &self.artifact.classes
    }

    fn probabilities(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        self.artifact.check_width(features)?;
        let mut acc = vec![0.0; self.artifact.classes.len()];
        for (i, tree) in self.artifact.trees.iter().enumerate() {
            let leaf = tree.leaf(features)?;
            let sum: f64 = leaf.iter().sum();
            if sum <= 0.0 {
                return Err(ModelError::Invalid(format!("tree {i} reached an empty leaf")));
            }
            let weight = self.artifact.weight(i);
            for (slot, v) in acc.iter_mut().zip(leaf) {
                *slot += weight * v / sum;
            }
        }
        let total = self.artifact.total_weight();
        Ok(acc.into_iter().map(|p| p / total).collect())
    }
}

impl Classifier for ForestClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        self.artifact.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        let probabilities = self.probabilities(features)?;
        // First class wins ties.
        let mut best: Option<(usize, f64)> = None;
        for (i, p) in probabilities.iter().enumerate() {
            match best {
                Some((_, top)) if *p <= top => {}
                _ => best = Some((i, *p)),
            }
        }
        best.and_then(|(i, _)| self.artifact.classes.get(i).copied())
            .ok_or_else(|| ModelError::Invalid("classifier has no classes".into()))
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Option<Vec<f64>>, ModelError> {
        self.probabilities(features).map(Some)
    }
}

/// Forest of single-value trees; the prediction is the weighted mean of
/// the reached leaves.
#[derive(Debug, Clone)]
pub struct ForestRegressor {
    name: String,
    artifact: EnsembleArtifact,
}

impl ForestRegressor {
    pub fn new(artifact: EnsembleArtifact) -> Result<Self, ModelError> {
        let artifact = artifact.expect_kind(EnsembleKind::Regressor)?;
        Ok(Self {
            name: artifact.display_name(),
            artifact,
        })
    }
}

impl Regressor for ForestRegressor {
    fn name(&self) -> &str {
        &self.name
    }

    fn n_features(&self) -> usize {
        self.artifact.n_features
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        self.artifact.check_width(features)?;
        let mut sum = 0.0;
        for (i, tree) in self.artifact.trees.iter().enumerate() {
            let value = tree
                .leaf(features)?
                .first()
                .copied()
                .ok_or_else(|| ModelError::Invalid(format!("tree {i} reached an empty leaf")))?;
            sum += self.artifact.weight(i) * value;
        }
        Ok(sum / self.artifact.total_weight())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIFIER: &str = r#"{
        "kind": "classifier",
        "name": "RandomForestClassifier",
        "n_features": 2,
        "classes": [0, 1],
        "trees": [
            {"nodes": [
                {"feature": 0, "threshold": 150.0, "left": 1, "right": 2},
                {"value": [1.0, 9.0]},
                {"value": [8.0, 2.0]}
            ]},
            {"nodes": [
                {"feature": 1, "threshold": 2.5, "left": 1, "right": 2},
                {"value": [0.0, 4.0]},
                {"value": [3.0, 1.0]}
            ]}
        ]
    }"#;

    const REGRESSOR: &str = r#"{
        "kind": "regressor",
        "n_features": 1,
        "weights": [3.0, 1.0],
        "trees": [
            {"nodes": [{"value": [8000.0]}]},
            {"nodes": [
                {"feature": 0, "threshold": 0.5, "left": 1, "right": 2},
                {"value": [4000.0]},
                {"value": [12000.0]}
            ]}
        ]
    }"#;

    fn classifier() -> ForestClassifier {
        ForestClassifier::new(EnsembleArtifact::from_json_str(CLASSIFIER).expect("artifact"))
            .expect("classifier")
    }

    #[test]
    fn classifier_averages_normalized_leaves() {
        let model = classifier();
        let proba = model
            .predict_proba(&[100.0, 1.0])
            .expect("proba")
            .expect("has proba");
        // (0.1 + 0.0) / 2 and (0.9 + 1.0) / 2
        assert!((proba[0] - 0.05).abs() < 1e-12);
        assert!((proba[1] - 0.95).abs() < 1e-12);
        assert_eq!(model.predict(&[100.0, 1.0]).ok(), Some(1));
        assert_eq!(model.predict(&[300.0, 5.0]).ok(), Some(0));
        assert_eq!(model.name(), "RandomForestClassifier");
    }

    #[test]
    fn classify_bundles_class_and_probabilities() {
        let out = classifier().classify(&[300.0, 1.0]).expect("classify");
        // (0.8 + 0.0) / 2 against (0.2 + 1.0) / 2
        assert_eq!(out.class, 1);
        assert_eq!(out.probabilities.map(|p| p.len()), Some(2));
    }

    #[test]
    fn wrong_feature_count_is_rejected() {
        let err = classifier().predict(&[1.0]).expect_err("width");
        assert!(matches!(err, ModelError::FeatureCount { expected: 2, actual: 1 }));
    }

    #[test]
    fn regressor_uses_tree_weights() {
        let artifact = EnsembleArtifact::from_json_str(REGRESSOR).expect("artifact");
        let model = ForestRegressor::new(artifact).expect("regressor");
        assert_eq!(model.name(), "RandomForestRegressor");
        let low = model.predict(&[0.0]).expect("predict");
        let high = model.predict(&[1.0]).expect("predict");
        assert!((low - 7000.0).abs() < 1e-9);
        assert!((high - 9000.0).abs() < 1e-9);
    }

    #[test]
    fn kind_mismatch_is_reported() {
        let artifact = EnsembleArtifact::from_json_str(REGRESSOR).expect("artifact");
        let err = ForestClassifier::new(artifact).expect_err("kind");
        assert!(matches!(
            err,
            ModelError::WrongKind {
                expected: "classifier",
                actual: "regressor"
            }
        ));
    }

    #[test]
    fn classifier_needs_two_classes() {
        let raw = CLASSIFIER.replace("[0, 1]", "[1]");
        assert!(matches!(
            EnsembleArtifact::from_json_str(&raw),
            Err(ModelError::Invalid(_))
        ));
    }

    #[test]
    fn mismatched_weights_are_rejected() {
        let raw = REGRESSOR.replace("[3.0, 1.0]", "[1.0]");
        assert!(EnsembleArtifact::from_json_str(&raw).is_err());
    }

    #[test]
    fn garbage_is_a_serde_error() {
        assert!(matches!(
            EnsembleArtifact::from_json_str("not json"),
            Err(ModelError::Serde(_))
        ));
    }
}
