use serde::Serialize;

use crate::category::{
    REGION_NORTH, REGION_NORTHEAST, REGION_SOUTH, REGION_SOUTHEAST, ROUTE_FREIGHT,
    ROUTE_HIGH_SPEED,
};
use crate::lifetime::{LifetimeRisk, MaintenanceItem};
use crate::record::PredictionRequest;
use crate::round_to;

pub const HOURS_PER_DAY: f64 = 24.0;
pub const DAYS_PER_YEAR: f64 = 365.25;
/// One year of continuous service; confidence peaks here.
pub const REFERENCE_LIFETIME_HOURS: f64 = 8760.0;

/// Lifetime estimate built around a regressor's prediction in hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelLifetimeReport {
    pub predicted_lifetime_hours: f64,
    pub predicted_lifetime_days: f64,
    pub predicted_lifetime_years: f64,
    pub confidence: f64,
    pub model_type: String,
    pub insights: Vec<String>,
    pub risk_assessment: LifetimeRisk,
    pub maintenance_schedule: Vec<MaintenanceItem>,
}

pub fn review_model_lifetime(
    hours: f64,
    model_type: &str,
    request: &PredictionRequest,
) -> ModelLifetimeReport {
    let days = hours / HOURS_PER_DAY;
    let years = days / DAYS_PER_YEAR;
    let confidence =
        (100.0 - (hours - REFERENCE_LIFETIME_HOURS).abs() / 500.0).clamp(60.0, 95.0);

    ModelLifetimeReport {
        predicted_lifetime_hours: round_to(hours, 1),
        predicted_lifetime_days: round_to(days, 1),
        predicted_lifetime_years: round_to(years, 2),
        confidence: round_to(confidence, 1),
        model_type: model_type.to_string(),
        insights: lifetime_insights(years, request),
        risk_assessment: years_risk(years),
        maintenance_schedule: interval_schedule(days),
    }
}

fn lifetime_insights(years: f64, request: &PredictionRequest) -> Vec<String> {
    let mut insights = Vec::new();
    if years < 2.0 {
        insights.push(format!("⚠️ Short predicted lifetime ({years:.1} years)"));
        insights.push("Consider alternative vendor or material".to_string());
    } else if years > 8.0 {
        insights.push(format!("✅ Excellent predicted lifetime ({years:.1} years)"));
        insights.push("Component expected to perform well".to_string());
    } else {
        insights.push(format!("📊 Standard predicted lifetime ({years:.1} years)"));
        insights.push("Component meets typical performance expectations".to_string());
    }

    match request.route_type.code {
        ROUTE_HIGH_SPEED => {
            insights.push("🚄 High-speed route may reduce actual lifetime by 10-15%".to_string());
        }
        ROUTE_FREIGHT => {
            insights.push("🚛 Heavy freight loads may impact component durability".to_string());
        }
        _ => {}
    }

    match request.region.code {
        REGION_NORTH | REGION_NORTHEAST => {
            insights.push("❄️ Cold climate may affect material properties".to_string());
        }
        REGION_SOUTH | REGION_SOUTHEAST => {
            insights.push("🌡️ Hot climate considerations for material expansion".to_string());
        }
        _ => {}
    }
    insights
}

pub fn years_risk(years: f64) -> LifetimeRisk {
    if years < 1.5 {
        LifetimeRisk::High
    } else if years < 3.0 {
        LifetimeRisk::Medium
    } else if years < 6.0 {
        LifetimeRisk::Low
    } else {
        LifetimeRisk::VeryLow
    }
}

/// Inspections at fixed day offsets picked by lifetime band, dropping any
/// that fall after the predicted end of life.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn interval_schedule(days: f64) -> Vec<MaintenanceItem> {
    let years = days / DAYS_PER_YEAR;
    let intervals: [i64; 4] = if years < 2.0 {
        [90, 180, 270, 360]
    } else if years < 5.0 {
        [180, 365, 545, 730]
    } else {
        [365, 730, 1095, 1460]
    };

    let mut schedule = vec![MaintenanceItem {
        description: Some("Post-installation verification".to_string()),
        ..MaintenanceItem::new("Initial Inspection", 30)
    }];
    for (i, interval) in intervals.iter().enumerate() {
        if (*interval as f64) < days {
            schedule.push(MaintenanceItem {
                description: Some(format!(
                    "Routine maintenance check at {:.1} years",
                    *interval as f64 / DAYS_PER_YEAR
                )),
                ..MaintenanceItem::new(format!("Scheduled Inspection #{}", i + 1), *interval)
            });
        }
    }
    if days > 365.0 {
        schedule.push(MaintenanceItem {
            description: Some("Final inspection before expected replacement".to_string()),
            ..MaintenanceItem::new("Pre-Replacement Inspection", (days * 0.9) as i64)
        });
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{REGIONS, ROUTE_TYPES};

    #[test]
    fn one_year_prediction_peaks_confidence() {
        let out = review_model_lifetime(8760.0, "VotingRegressor", &PredictionRequest::default());
        assert!((out.confidence - 95.0).abs() < f64::EPSILON);
        assert!((out.predicted_lifetime_days - 365.0).abs() < f64::EPSILON);
        assert_eq!(out.risk_assessment, LifetimeRisk::High);
        assert_eq!(out.insights[0], "⚠️ Short predicted lifetime (1.0 years)");
        assert_eq!(
            out.insights.last().map(String::as_str),
            Some("❄️ Cold climate may affect material properties")
        );
        // 365 days: 90/180/270/360 fit, no pre-replacement step.
        assert_eq!(out.maintenance_schedule.len(), 5);
    }

    #[test]
    fn confidence_floors_at_sixty() {
        let request = PredictionRequest {
            region: REGIONS.resolve("Central"),
            route_type: ROUTE_TYPES.resolve("Freight"),
            ..PredictionRequest::default()
        };
        let out = review_model_lifetime(80_000.0, "m", &request);
        assert!((out.confidence - 60.0).abs() < f64::EPSILON);
        assert_eq!(out.risk_assessment, LifetimeRisk::VeryLow);
        assert_eq!(out.insights.len(), 3);
        assert_eq!(out.insights[2], "🚛 Heavy freight loads may impact component durability");
    }

    #[test]
    fn long_lifetimes_get_yearly_inspections() {
        let schedule = interval_schedule(3000.0);
        assert_eq!(schedule.len(), 6);
        assert_eq!(schedule[1].days_from_install, 365);
        assert_eq!(schedule[5].kind, "Pre-Replacement Inspection");
        assert_eq!(schedule[5].days_from_install, 2700);
    }

    #[test]
    fn risk_bands() {
        assert_eq!(years_risk(1.49), LifetimeRisk::High);
        assert_eq!(years_risk(2.0), LifetimeRisk::Medium);
        assert_eq!(years_risk(5.9), LifetimeRisk::Low);
        assert_eq!(years_risk(6.0), LifetimeRisk::VeryLow);
    }
}
