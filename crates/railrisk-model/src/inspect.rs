use serde::Serialize;

use crate::config::ModelSource;
use crate::ensemble::{EnsembleArtifact, EnsembleKind, ForestClassifier, ForestRegressor};
use crate::error::ModelError;
use crate::traits::{Classifier, Regressor};
use crate::types::{CLASSIFIER_FEATURES, REGRESSOR_FEATURES};

/// Classifier sample: vendor 1, part 1, material 1, lifetime 5, region 1, route 1.
pub const CLASSIFIER_SAMPLE: [f64; 6] = [1.0, 1.0, 1.0, 5.0, 1.0, 1.0];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInspection {
    pub kind: String,
    pub model_type: String,
    pub n_features: usize,
    /// Known column names when the width matches the documented layout.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub feature_names: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<i64>,
    pub n_trees: usize,
    pub has_predict: bool,
    pub has_predict_proba: bool,
    pub sample_input: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_prediction: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_probabilities: Option<Vec<f64>>,
    /// Set when the sample could not be evaluated; loading still succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_error: Option<String>,
}

/// Loads the artifact and runs a fixed sample vector through it.
#[allow(clippy::cast_precision_loss)]
pub fn inspect_model(source: ModelSource) -> Result<ModelInspection, ModelError> {
    let ModelSource::TreeEnsembleJson(path) = source;
    let artifact = EnsembleArtifact::from_path(path)?;
    let layout: &[&str] = match artifact.kind {
        EnsembleKind::Classifier => &CLASSIFIER_FEATURES,
        EnsembleKind::Regressor => &REGRESSOR_FEATURES,
    };
    let feature_names = if layout.len() == artifact.n_features {
        layout.iter().map(ToString::to_string).collect()
    } else {
        Vec::new()
    };
    let mut report = ModelInspection {
        kind: artifact.kind.as_str().to_string(),
        model_type: artifact.display_name(),
        n_features: artifact.n_features,
        feature_names,
        classes: artifact.classes.clone(),
        n_trees: artifact.trees.len(),
        has_predict: true,
        has_predict_proba: artifact.kind == EnsembleKind::Classifier,
        sample_input: Vec::new(),
        sample_prediction: None,
        sample_probabilities: None,
        prediction_error: None,
    };

    match artifact.kind {
        EnsembleKind::Classifier => {
            let model = ForestClassifier::new(artifact)?;
            report.sample_input = CLASSIFIER_SAMPLE.to_vec();
            match model.classify(&CLASSIFIER_SAMPLE) {
                Ok(out) => {
                    report.sample_prediction = Some(out.class as f64);
                    report.sample_probabilities = out.probabilities;
                }
                Err(err) => report.prediction_error = Some(err.to_string()),
            }
        }
        EnsembleKind::Regressor => {
            let model = ForestRegressor::new(artifact)?;
            report.sample_input = vec![1.0; model.n_features()];
            match model.predict(&report.sample_input) {
                Ok(hours) => report.sample_prediction = Some(hours),
                Err(err) => report.prediction_error = Some(err.to_string()),
            }
        }
    }
    Ok(report)
}
