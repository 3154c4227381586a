use crate::category::{ROUTE_FREIGHT, ROUTE_HIGH_SPEED};
use crate::conditions::{regional_lifetime_factor, MaterialGrade, StorageDelay};
use crate::history::{DimensionProfile, HistoryProfiles};
use crate::ledger::FactorLedger;
use crate::record::PredictionRequest;
use crate::subset::{Baseline, SubsetStats};

pub const MIN_RISK_SCORE: f64 = 0.0;
pub const MAX_RISK_SCORE: f64 = 100.0;

/// Everything the threshold rules look at for one request.
#[derive(Debug, Clone, Copy)]
pub struct RiskInputs<'a> {
    pub request: &'a PredictionRequest,
    pub baseline: &'a Baseline,
    pub history: &'a HistoryProfiles,
    pub exact: Option<SubsetStats>,
    pub similar: Option<SubsetStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskScore {
    /// Clamped to `[0, 100]`.
    pub score: f64,
    pub factors: Vec<String>,
}

/// Runs every rule in order and clamps the accumulated points.
///
/// Rules are independent: each one inspects a single factor and may add or
/// subtract points regardless of what earlier rules did.
pub fn score_risk(inputs: &RiskInputs<'_>) -> RiskScore {
    let request = inputs.request;
    let history = inputs.history;
    let mut ledger = FactorLedger::new();

    baseline_defect_rule(&mut ledger, inputs.baseline);
    vendor_rule(&mut ledger, request.vendor_id, &history.vendor);
    part_type_rule(&mut ledger, &request.part_type.label, &history.part_type);
    material_record_rule(&mut ledger, request.material, &history.material);
    route_record_rule(&mut ledger, &request.route_type.label, &history.route);
    route_stress_rule(&mut ledger, request.route_type.code);
    lifetime_ratio_rule(&mut ledger, request, history.part_type.mean_lifetime());
    material_grade_rule(&mut ledger, request.material);
    regional_rule(&mut ledger, &request.region.label, request.region.code);
    storage_delay_rule(&mut ledger, request.days_manuf_to_install);
    match_rule(&mut ledger, inputs.exact, inputs.similar);

    let (total, factors) = ledger.into_parts();
    RiskScore {
        score: total.clamp(MIN_RISK_SCORE, MAX_RISK_SCORE),
        factors,
    }
}

fn baseline_defect_rule(ledger: &mut FactorLedger, baseline: &Baseline) {
    let rate = baseline.defect_rate;
    if rate > 10.0 {
        ledger.apply(
            30.0,
            format!(
                "High historical defect rate: {rate:.1}% ({})",
                baseline.data_source()
            ),
        );
    } else if rate > 5.0 {
        ledger.apply(
            15.0,
            format!(
                "Moderate historical defect rate: {rate:.1}% ({})",
                baseline.data_source()
            ),
        );
    }
}

fn vendor_rule(ledger: &mut FactorLedger, vendor_id: i64, vendor: &DimensionProfile) {
    let rate = vendor.defect_rate();
    if rate > 30.0 {
        ledger.apply(
            40.0,
            format!("Vendor {vendor_id} has high defect rate: {rate:.1}%"),
        );
    } else if rate > 15.0 {
        ledger.apply(
            25.0,
            format!("Vendor {vendor_id} shows elevated defect rate: {rate:.1}%"),
        );
    } else if rate > 0.0 {
        ledger.apply(
            10.0,
            format!("Vendor {vendor_id} has some defects: {rate:.1}%"),
        );
    } else {
        ledger.apply(
            -5.0,
            format!("Vendor {vendor_id} has perfect record (0% defects)"),
        );
    }
}

fn part_type_rule(ledger: &mut FactorLedger, label: &str, part_type: &DimensionProfile) {
    let rate = part_type.defect_rate();
    if rate > 25.0 {
        ledger.apply(
            30.0,
            format!("{label} components show high failure rate: {rate:.1}%"),
        );
    } else if rate > 10.0 {
        ledger.apply(
            15.0,
            format!("{label} components have moderate failure rate: {rate:.1}%"),
        );
    } else if part_type.is_spotless() {
        ledger.apply(-10.0, format!("{label} components have perfect record in data"));
    }
}

fn material_record_rule(ledger: &mut FactorLedger, material: i64, profile: &DimensionProfile) {
    let rate = profile.defect_rate();
    if rate > 30.0 {
        ledger.apply(
            25.0,
            format!("Material {material} shows high failure rate: {rate:.1}%"),
        );
    } else if rate > 15.0 {
        ledger.apply(
            15.0,
            format!("Material {material} has elevated failure rate: {rate:.1}%"),
        );
    } else if profile.is_spotless() {
        ledger.apply(-5.0, format!("Material {material} has excellent record"));
    }
}

fn route_record_rule(ledger: &mut FactorLedger, label: &str, route: &DimensionProfile) {
    let rate = route.defect_rate();
    if rate > 25.0 {
        ledger.apply(
            20.0,
            format!("{label} routes show higher failure rates: {rate:.1}%"),
        );
    } else if rate > 10.0 {
        ledger.apply(
            10.0,
            format!("{label} routes have moderate failure rates: {rate:.1}%"),
        );
    }
}

fn route_stress_rule(ledger: &mut FactorLedger, route_code: i64) {
    match route_code {
        ROUTE_HIGH_SPEED => {
            ledger.apply(20.0, "High-speed route increases stress on components");
        }
        ROUTE_FREIGHT => ledger.apply(15.0, "Heavy freight loads increase wear"),
        _ => {}
    }
}

#[allow(clippy::cast_precision_loss)]
fn lifetime_ratio_rule(ledger: &mut FactorLedger, request: &PredictionRequest, expected: f64) {
    if expected <= 0.0 {
        return;
    }
    let requested = request.lifetime_days;
    let label = &request.part_type.label;
    let ratio = requested as f64 / expected;
    if ratio > 2.0 {
        ledger.apply(
            35.0,
            format!(
                "Expected lifetime ({requested} days) far exceeds typical {label} performance ({expected:.0} days)"
            ),
        );
    } else if ratio > 1.5 {
        ledger.apply(
            25.0,
            format!("Expected lifetime significantly above average for {label}"),
        );
    } else if ratio > 1.2 {
        ledger.apply(10.0, format!("Expected lifetime above average for {label}"));
    } else if ratio < 0.5 {
        ledger.apply(20.0, "Very short expected lifetime may indicate quality issues");
    } else if ratio < 0.8 {
        ledger.apply(10.0, "Below-average expected lifetime");
    }
}

fn material_grade_rule(ledger: &mut FactorLedger, material: i64) {
    match MaterialGrade::of(material) {
        MaterialGrade::High => {
            ledger.apply(-5.0, format!("Material grade {material} is high quality"));
        }
        MaterialGrade::Low => ledger.apply(
            15.0,
            format!("Material grade {material} is prone to accelerated wear"),
        ),
        MaterialGrade::Standard => {}
    }
}

fn regional_rule(ledger: &mut FactorLedger, label: &str, region_code: i64) {
    // Harsher regions shorten lifetime; one point per percent lost.
    let points = (-regional_lifetime_factor(region_code) * 100.0).round();
    if points > 0.0 {
        ledger.apply(points, format!("{label} region conditions increase wear"));
    } else if points < 0.0 {
        ledger.apply(
            points,
            format!("{label} region conditions favor component durability"),
        );
    }
}

fn storage_delay_rule(ledger: &mut FactorLedger, days: i64) {
    match StorageDelay::of(days) {
        StorageDelay::Extended => ledger.apply(
            10.0,
            format!("Extended storage ({days} days) before installation raises defect risk"),
        ),
        StorageDelay::Quick => {
            ledger.apply(-5.0, "Quick installation after manufacturing is beneficial");
        }
        StorageDelay::Normal => {}
    }
}

fn match_rule(
    ledger: &mut FactorLedger,
    exact: Option<SubsetStats>,
    similar: Option<SubsetStats>,
) {
    if let Some(exact) = exact {
        let rate = exact.defect_rate;
        if rate > 50.0 {
            ledger.apply(
                40.0,
                format!("Identical components in data show {rate:.1}% failure rate"),
            );
        } else if exact.defects > 0 {
            ledger.apply(
                20.0,
                format!("Identical components show {rate:.1}% defect rate"),
            );
        } else {
            ledger.apply(
                -15.0,
                format!(
                    "Identical components have perfect record ({} samples)",
                    exact.samples
                ),
            );
        }
    } else if let Some(similar) = similar {
        let rate = similar.defect_rate;
        if rate > 30.0 {
            ledger.apply(25.0, format!("Similar components show {rate:.1}% failure rate"));
        } else if rate > 10.0 {
            ledger.apply(15.0, format!("Similar components have {rate:.1}% defect rate"));
        }
    }
}
