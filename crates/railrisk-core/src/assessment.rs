use serde::Serialize;

use crate::history::HistoryProfiles;
use crate::recommend::{recommendations, RecommendationContext};
use crate::record::{ComponentRecord, PredictionRequest};
use crate::risk::{score_risk, RiskInputs};
use crate::round_to;
use crate::subset::{Baseline, SubsetSelection};
use crate::verdict::{Status, Verdict};

pub const DATA_MODEL_NAME: &str = "Real Data Analysis Model";
pub const DATA_MODEL_FEATURES: usize = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub prediction: Verdict,
    pub probability: f64,
    pub status: Status,
    pub risk_score: f64,
    pub risk_factors: Vec<String>,
    pub historical_performance: HistoricalPerformance,
    pub historical_data: HistoricalData,
    pub recommendations: Vec<String>,
    pub model_info: ModelInfo,
}

/// Per-attribute defect history for the request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalPerformance {
    /// Vendor defect rate in percent.
    pub historical_defect_rate: f64,
    pub total_parts_supplied: usize,
    /// Vendor mean lifetime in years.
    pub avg_lifetime: f64,
    pub part_type_defect_rate: f64,
    pub material_defect_rate: f64,
    pub route_defect_rate: f64,
    pub exact_matches: usize,
    pub similar_matches: usize,
}

/// Summary of the subset that supplied the baseline statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalData {
    pub data_source: String,
    pub sample_count: usize,
    pub base_lifetime_days: f64,
    pub defect_rate: f64,
    pub confidence_base: f64,
}

impl HistoricalData {
    pub fn from_baseline(baseline: &Baseline) -> Self {
        Self {
            data_source: baseline.data_source(),
            sample_count: baseline.samples(),
            base_lifetime_days: baseline.base_lifetime.round(),
            defect_rate: round_to(baseline.defect_rate, 2),
            confidence_base: baseline.confidence_base,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub features_used: usize,
    pub training_data_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_patterns: Option<String>,
}

/// Data-driven risk assessment: subset cascade, threshold rules, verdict,
/// recommendations.
pub fn assess(records: &[ComponentRecord], request: &PredictionRequest) -> RiskAssessment {
    let selection = SubsetSelection::select(records, request);
    let baseline = selection.baseline();
    let history = HistoryProfiles::build(records, request);
    let exact = selection.exact_stats();

    let risk = score_risk(&RiskInputs {
        request,
        baseline: &baseline,
        history: &history,
        exact,
        similar: selection.similar_stats(),
    });
    let verdict = Verdict::from_score(risk.score);
    let confidence = verdict.confidence(risk.score);
    let recommendations = recommendations(
        verdict,
        confidence,
        &RecommendationContext {
            exact_failures: exact.map_or(0, |s| s.defects),
            vendor_spotless: history.vendor.is_spotless(),
            expected_lifetime_days: history.part_type.mean_lifetime(),
        },
    );

    RiskAssessment {
        prediction: verdict,
        probability: round_to(confidence, 1),
        status: verdict.status(),
        risk_score: round_to(risk.score, 1),
        risk_factors: risk.factors,
        historical_performance: HistoricalPerformance {
            historical_defect_rate: round_to(history.vendor.defect_rate(), 2),
            total_parts_supplied: history.vendor.samples(),
            avg_lifetime: round_to(history.vendor.mean_lifetime() / 365.0, 1),
            part_type_defect_rate: round_to(history.part_type.defect_rate(), 2),
            material_defect_rate: round_to(history.material.defect_rate(), 2),
            route_defect_rate: round_to(history.route.defect_rate(), 2),
            exact_matches: selection.exact.len(),
            similar_matches: selection.similar.len(),
        },
        historical_data: HistoricalData::from_baseline(&baseline),
        recommendations,
        model_info: ModelInfo {
            model_type: DATA_MODEL_NAME.to_string(),
            features_used: DATA_MODEL_FEATURES,
            training_data_size: records.len(),
            data_patterns: Some(format!("Analyzed {} real components", records.len())),
        },
    }
}
