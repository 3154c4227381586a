use std::sync::Arc;

use crate::config::ModelSource;
use crate::ensemble::{EnsembleArtifact, ForestClassifier, ForestRegressor};
use crate::error::ModelError;
use crate::traits::{Classifier, Regressor};

pub fn build_classifier(source: ModelSource) -> Result<Arc<dyn Classifier>, ModelError> {
    match source {
        ModelSource::TreeEnsembleJson(path) => Ok(Arc::new(ForestClassifier::new(
            EnsembleArtifact::from_path(path)?,
        )?)),
    }
}

pub fn build_regressor(source: ModelSource) -> Result<Arc<dyn Regressor>, ModelError> {
    match source {
        ModelSource::TreeEnsembleJson(path) => Ok(Arc::new(ForestRegressor::new(
            EnsembleArtifact::from_path(path)?,
        )?)),
    }
}
