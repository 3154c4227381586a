//! Degraded payloads printed when a command cannot produce its report.
//! Callers always receive one JSON object on stdout.

use std::ffi::OsString;

use serde_json::{json, Value};

use crate::cli::Command;

/// Families of commands sharing a fallback shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Risk,
    Lifetime,
    Inspect,
}

impl Flow {
    pub const fn of(command: &Command) -> Self {
        match command {
            Command::Assess(_) | Command::Classify(_) | Command::Predict(_) => Self::Risk,
            Command::Lifetime(_) | Command::LifetimeModel(_) => Self::Lifetime,
            Command::InspectModel(_) => Self::Inspect,
        }
    }

    /// Best guess from raw arguments when they did not parse; the first
    /// recognised subcommand name decides, risk otherwise.
    pub fn guess(args: &[OsString]) -> Self {
        args.iter()
            .skip(1)
            .find_map(|arg| match arg.to_str()? {
                "assess" | "classify" | "predict" => Some(Self::Risk),
                "lifetime" | "lifetime-model" => Some(Self::Lifetime),
                "inspect-model" => Some(Self::Inspect),
                _ => None,
            })
            .unwrap_or(Self::Risk)
    }
}

pub fn fallback_payload(flow: Flow, message: &str) -> Value {
    match flow {
        Flow::Risk => json!({
            "prediction": "PASS",
            "probability": 75.0,
            "status": "pass",
            "error": message,
            "recommendations": ["Model analysis unavailable", "Manual inspection recommended"],
        }),
        Flow::Lifetime => json!({
            "error": message,
            "predicted_lifetime_hours": 24000,
            "predicted_lifetime_days": 1000,
            "predicted_lifetime_years": 2.7,
            "confidence": 50.0,
            "model_type": "Error Fallback",
            "insights": ["Lifetime prediction failed", "Using default estimates"],
            "risk_assessment": "Unknown",
            "maintenance_schedule": [],
        }),
        Flow::Inspect => json!({ "error": message }),
    }
}
