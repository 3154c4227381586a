use serde::Serialize;

use crate::conditions::{
    regional_lifetime_factor, route_lifetime_factor, warranty_lifetime_factor, MaterialGrade,
    StorageDelay,
};
use crate::ledger::FactorLedger;
use crate::record::{ComponentRecord, PredictionRequest};
use crate::round_to;
use crate::subset::{Baseline, SubsetSelection};

pub const MIN_LIFETIME_DAYS: f64 = 180.0;
pub const MIN_LIFETIME_CONFIDENCE: f64 = 40.0;
pub const MAX_LIFETIME_CONFIDENCE: f64 = 95.0;
pub const DATA_LIFETIME_MODEL_NAME: &str = "Data-Driven Lifetime Prediction";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifetimeRisk {
    High,
    Medium,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub days_from_install: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaintenanceItem {
    pub(crate) fn new(kind: impl Into<String>, days_from_install: i64) -> Self {
        Self {
            kind: kind.into(),
            days_from_install,
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifetimeEstimate {
    pub predicted_lifetime_days: i64,
    pub predicted_lifetime_years: f64,
    pub predicted_lifetime_hours: i64,
    pub confidence: f64,
    pub model_type: String,
    pub insights: Vec<String>,
    pub risk_assessment: LifetimeRisk,
    pub maintenance_schedule: Vec<MaintenanceItem>,
    pub historical_data: LifetimeHistory,
    pub analysis_factors: AnalysisFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifetimeHistory {
    pub data_source: String,
    pub base_lifetime_days: f64,
    pub defect_rate: f64,
    pub total_adjustments_days: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisFactors {
    pub route_impact: String,
    pub material_impact: String,
    pub warranty_correlation: String,
    pub regional_factor: String,
}

/// Output of the adjustment pass before confidence and scheduling.
#[derive(Debug, Clone, PartialEq)]
pub struct LifetimeAdjustment {
    pub base_lifetime: f64,
    /// Day deltas with their insight notes.
    pub ledger: FactorLedger,
    pub predicted_days: f64,
    pub route_factor: f64,
    pub grade: MaterialGrade,
    pub warranty_factor: f64,
    pub regional_factor: f64,
}

/// Sums percentage adjustments of the base lifetime and floors the result
/// at [`MIN_LIFETIME_DAYS`].
pub fn adjust_lifetime(base_lifetime: f64, request: &PredictionRequest) -> LifetimeAdjustment {
    let mut ledger = FactorLedger::new();

    let route_factor = route_lifetime_factor(request.route_type.code);
    if route_factor < 0.0 {
        ledger.apply(
            base_lifetime * route_factor,
            format!(
                "{} operations reduce lifetime by {:.0}%",
                request.route_type.label,
                route_factor.abs() * 100.0
            ),
        );
    }

    let grade = MaterialGrade::of(request.material);
    match grade {
        MaterialGrade::High => ledger.apply(
            base_lifetime * grade.lifetime_factor(),
            "High-quality materials extend component lifetime",
        ),
        MaterialGrade::Low => ledger.apply(
            base_lifetime * grade.lifetime_factor(),
            "Material grade may reduce expected lifetime",
        ),
        MaterialGrade::Standard => {}
    }

    let warranty_factor = warranty_lifetime_factor(request.warranty_years);
    let years = request.warranty_years;
    if warranty_factor > 0.0 {
        ledger.apply(
            base_lifetime * warranty_factor,
            format!("Extended {years}-year warranty indicates higher quality"),
        );
    } else if warranty_factor < 0.0 {
        ledger.apply(
            base_lifetime * warranty_factor,
            format!("Short {years}-year warranty may indicate lower durability"),
        );
    }

    let regional_factor = regional_lifetime_factor(request.region.code);
    let region = &request.region.label;
    if regional_factor < 0.0 {
        ledger.apply(
            base_lifetime * regional_factor,
            format!("{region} region conditions may reduce component life"),
        );
    } else if regional_factor > 0.0 {
        ledger.apply(
            base_lifetime * regional_factor,
            format!("{region} region conditions favor longer component life"),
        );
    }

    let delay = StorageDelay::of(request.days_manuf_to_install);
    match delay {
        StorageDelay::Extended => ledger.apply(
            base_lifetime * delay.lifetime_factor(),
            "Extended storage before installation may affect performance",
        ),
        StorageDelay::Quick => ledger.apply(
            base_lifetime * delay.lifetime_factor(),
            "Quick installation after manufacturing is beneficial",
        ),
        StorageDelay::Normal => {}
    }

    LifetimeAdjustment {
        base_lifetime,
        predicted_days: (base_lifetime + ledger.total()).max(MIN_LIFETIME_DAYS),
        ledger,
        route_factor,
        grade,
        warranty_factor,
        regional_factor,
    }
}

/// Starts from the tier's confidence base and moves it by the historical
/// defect rate, clamped to `[40, 95]`.
pub fn lifetime_confidence(baseline: &Baseline, ledger: &mut FactorLedger) -> f64 {
    let mut confidence = baseline.confidence_base;
    if baseline.defect_rate > 20.0 {
        confidence -= 20.0;
        ledger.note("High defect rate in historical data reduces confidence");
    } else if baseline.defect_rate < 5.0 {
        confidence += 10.0;
        ledger.note("Low defect rate in historical data increases confidence");
    }
    confidence.clamp(MIN_LIFETIME_CONFIDENCE, MAX_LIFETIME_CONFIDENCE)
}

pub fn defect_rate_risk(defect_rate: f64, ledger: &mut FactorLedger) -> LifetimeRisk {
    if defect_rate > 15.0 {
        ledger.note("Component type shows elevated failure risk");
        LifetimeRisk::High
    } else if defect_rate > 8.0 {
        ledger.note("Component type shows moderate failure risk");
        LifetimeRisk::Medium
    } else {
        ledger.note("Component type shows low failure risk");
        LifetimeRisk::Low
    }
}

/// Milestones at fixed fractions of the predicted lifetime.
#[allow(clippy::cast_possible_truncation)]
pub fn proportional_schedule(predicted_days: f64) -> Vec<MaintenanceItem> {
    let at = |fraction: f64| (predicted_days * fraction) as i64;
    vec![
        MaintenanceItem::new("Initial Inspection", 30),
        MaintenanceItem::new("First Maintenance", at(0.15)),
        MaintenanceItem::new("Quarter-life Check", at(0.25)),
        MaintenanceItem::new("Mid-life Inspection", at(0.5)),
        MaintenanceItem::new("Three-quarter Check", at(0.75)),
        MaintenanceItem::new("Pre-replacement Inspection", at(0.9)),
        MaintenanceItem::new("Replacement Due", at(1.0)),
    ]
}

fn signed_percent(factor: f64) -> String {
    format!("{:+.0}%", factor * 100.0)
}

impl AnalysisFactors {
    pub fn from_adjustment(adjustment: &LifetimeAdjustment) -> Self {
        let nonzero = |f: f64| f.abs() > f64::EPSILON;
        Self {
            route_impact: if nonzero(adjustment.route_factor) {
                signed_percent(adjustment.route_factor)
            } else {
                "No impact".to_string()
            },
            material_impact: match adjustment.grade {
                MaterialGrade::High => "Positive",
                MaterialGrade::Low => "Negative",
                MaterialGrade::Standard => "Neutral",
            }
            .to_string(),
            warranty_correlation: if nonzero(adjustment.warranty_factor) {
                signed_percent(adjustment.warranty_factor)
            } else {
                "Standard".to_string()
            },
            regional_factor: if nonzero(adjustment.regional_factor) {
                signed_percent(adjustment.regional_factor)
            } else {
                "Neutral".to_string()
            },
        }
    }
}

/// Data-driven lifetime estimate from the subset cascade.
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_lifetime(
    records: &[ComponentRecord],
    request: &PredictionRequest,
) -> LifetimeEstimate {
    let baseline = SubsetSelection::select(records, request).baseline();
    let adjustment = adjust_lifetime(baseline.base_lifetime, request);
    let predicted_days = adjustment.predicted_days;

    let mut ledger = adjustment.ledger.clone();
    let confidence = lifetime_confidence(&baseline, &mut ledger);
    let risk_assessment = defect_rate_risk(baseline.defect_rate, &mut ledger);
    let (adjustment_days, insights) = ledger.into_parts();

    LifetimeEstimate {
        predicted_lifetime_days: predicted_days as i64,
        predicted_lifetime_years: round_to(predicted_days / 365.0, 1),
        predicted_lifetime_hours: (predicted_days * 24.0) as i64,
        confidence: round_to(confidence, 1),
        model_type: DATA_LIFETIME_MODEL_NAME.to_string(),
        insights,
        risk_assessment,
        maintenance_schedule: proportional_schedule(predicted_days),
        historical_data: LifetimeHistory {
            data_source: baseline.data_source(),
            base_lifetime_days: baseline.base_lifetime.round(),
            defect_rate: round_to(baseline.defect_rate, 2),
            total_adjustments_days: adjustment_days.round(),
        },
        analysis_factors: AnalysisFactors::from_adjustment(&adjustment),
    }
}
