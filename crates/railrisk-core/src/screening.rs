//! Review of a classifier's pass/broke verdict against historical data.

use serde::Serialize;

use crate::assessment::ModelInfo;
use crate::history::HistoryProfiles;
use crate::recommend::classifier_recommendations;
use crate::record::{ComponentRecord, PredictionRequest};
use crate::risk::{score_risk, RiskInputs};
use crate::round_to;
use crate::subset::{SubsetSelection, SubsetStats};
use crate::verdict::Status;

/// Class label the classifiers emit for a component expected to survive.
pub const PASS_CLASS: i64 = 1;
/// Used when the classifier cannot report class probabilities.
pub const DEFAULT_CLASSIFIER_CONFIDENCE: f64 = 85.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassOutcome {
    Pass,
    Broke,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassVerdict {
    pub prediction: ClassOutcome,
    pub probability: f64,
    pub status: Status,
}

impl ClassVerdict {
    /// Confidence is the top class probability, or 85% when the model has
    /// no probability output.
    pub fn from_prediction(class: i64, probabilities: Option<&[f64]>) -> Self {
        let confidence = probabilities
            .and_then(|p| p.iter().copied().reduce(f64::max))
            .map_or(DEFAULT_CLASSIFIER_CONFIDENCE, |p| p * 100.0);
        let passed = class == PASS_CLASS;
        Self {
            prediction: if passed {
                ClassOutcome::Pass
            } else {
                ClassOutcome::Broke
            },
            probability: round_to(confidence, 1),
            status: if passed { Status::Pass } else { Status::Fail },
        }
    }

    pub fn passed(&self) -> bool {
        self.prediction == ClassOutcome::Pass
    }
}

/// Defect history of this vendor for this part type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VendorPartHistory {
    pub historical_defect_rate: f64,
    pub total_parts_supplied: usize,
    /// Mean lifetime in days.
    pub avg_lifetime: f64,
}

impl VendorPartHistory {
    pub fn collect(records: &[ComponentRecord], request: &PredictionRequest) -> Self {
        let stats = SubsetStats::from_records(records.iter().filter(|r| {
            r.vendor_id == request.vendor_id && request.matches_part_type(r)
        }));
        stats.map_or(
            Self {
                historical_defect_rate: 0.0,
                total_parts_supplied: 0,
                avg_lifetime: 0.0,
            },
            |s| Self {
                historical_defect_rate: round_to(s.defect_rate, 2),
                total_parts_supplied: s.samples,
                avg_lifetime: round_to(s.mean_lifetime, 1),
            },
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationReport {
    #[serde(flatten)]
    pub verdict: ClassVerdict,
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
    pub historical_performance: VendorPartHistory,
    pub recommendations: Vec<String>,
    pub model_info: ModelInfo,
}

pub fn review_classification(
    verdict: ClassVerdict,
    model_type: &str,
    features_used: usize,
    records: &[ComponentRecord],
    request: &PredictionRequest,
) -> ClassificationReport {
    let selection = SubsetSelection::select(records, request);
    let baseline = selection.baseline();
    let history = HistoryProfiles::build(records, request);
    let risk = score_risk(&RiskInputs {
        request,
        baseline: &baseline,
        history: &history,
        exact: selection.exact_stats(),
        similar: selection.similar_stats(),
    });
    let vendor_part = VendorPartHistory::collect(records, request);

    ClassificationReport {
        verdict,
        risk_score: round_to(risk.score, 1),
        risk_factors: risk.factors,
        historical_performance: vendor_part,
        recommendations: classifier_recommendations(
            verdict.passed(),
            verdict.probability,
            vendor_part.historical_defect_rate,
        ),
        model_info: ModelInfo {
            model_type: model_type.to_string(),
            features_used,
            training_data_size: records.len(),
            data_patterns: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_comes_from_top_probability() {
        let v = ClassVerdict::from_prediction(1, Some(&[0.2, 0.8]));
        assert_eq!(v.prediction, ClassOutcome::Pass);
        assert_eq!(v.status, Status::Pass);
        assert!((v.probability - 80.0).abs() < 1e-9);

        let v = ClassVerdict::from_prediction(0, None);
        assert_eq!(v.prediction, ClassOutcome::Broke);
        assert_eq!(v.status, Status::Fail);
        assert!((v.probability - DEFAULT_CLASSIFIER_CONFIDENCE).abs() < f64::EPSILON);
    }

    #[test]
    fn report_flattens_verdict_fields() {
        let records = vec![ComponentRecord {
            vendor_id: 100,
            part_type: 1,
            material: 4,
            defect: true,
            lifetime_days: 700,
            region: 1,
            route_type: 2,
            warranty_years: 2,
        }];
        let verdict = ClassVerdict::from_prediction(0, Some(&[0.9, 0.1]));
        let report = review_classification(
            verdict,
            "Random Forest",
            6,
            &records,
            &PredictionRequest::default(),
        );
        assert_eq!(report.historical_performance.total_parts_supplied, 1);
        assert!((report.historical_performance.historical_defect_rate - 100.0).abs() < 1e-9);
        assert_eq!(report.recommendations.len(), 5);

        let value = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(value["prediction"], "BROKE");
        assert_eq!(value["status"], "fail");
        assert_eq!(value["probability"], 90.0);
        assert_eq!(value["model_info"]["features_used"], 6);
        assert!(value["model_info"].get("data_patterns").is_none());
    }

    #[test]
    fn unknown_vendor_part_history_is_zeroed() {
        let history = VendorPartHistory::collect(&[], &PredictionRequest::default());
        assert_eq!(history.total_parts_supplied, 0);
        assert!(history.avg_lifetime.abs() < f64::EPSILON);
    }
}
