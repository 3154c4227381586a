use crate::error::ModelError;
use crate::types::Classification;

/// Opaque pass/fail classifier over a fixed-order numeric feature vector.
pub trait Classifier: Send + Sync {
    fn name(&self) -> &str;

    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<i64, ModelError>;

    /// Class probabilities in class order, when the model can produce them.
    fn predict_proba(&self, features: &[f64]) -> Result<Option<Vec<f64>>, ModelError> {
        let _ = features;
        Ok(None)
    }

    fn classify(&self, features: &[f64]) -> Result<Classification, ModelError> {
        Ok(Classification {
            class: self.predict(features)?,
            probabilities: self.predict_proba(features)?,
        })
    }
}

/// Opaque lifetime regressor; predictions are in hours.
pub trait Regressor: Send + Sync {
    fn name(&self) -> &str;

    fn n_features(&self) -> usize;

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;
}
