use serde::Serialize;

pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
pub const MODERATE_RISK_THRESHOLD: f64 = 40.0;
pub const LOW_RISK_THRESHOLD: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Verdict {
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "LOW RISK")]
    LowRisk,
    #[serde(rename = "MODERATE RISK")]
    ModerateRisk,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

impl Verdict {
    /// Band lower bounds are inclusive: 70 is HIGH RISK, 69 is MODERATE.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::HighRisk
        } else if score >= MODERATE_RISK_THRESHOLD {
            Self::ModerateRisk
        } else if score >= LOW_RISK_THRESHOLD {
            Self::LowRisk
        } else {
            Self::Approved
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::LowRisk => "LOW RISK",
            Self::ModerateRisk => "MODERATE RISK",
            Self::HighRisk => "HIGH RISK",
        }
    }

    pub const fn status(self) -> Status {
        match self {
            Self::HighRisk => Status::Fail,
            Self::ModerateRisk => Status::Warning,
            Self::LowRisk | Self::Approved => Status::Pass,
        }
    }

    /// Per-band linear confidence. Bands do not meet at the boundaries
    /// (67.4 -> 70 at 70, 55.8 -> 50 at 40, 85.5 -> 75 at 15).
    pub fn confidence(self, score: f64) -> f64 {
        match self {
            Self::HighRisk => (70.0 + (score - HIGH_RISK_THRESHOLD) * 0.8).min(95.0),
            Self::ModerateRisk => 50.0 + (score - MODERATE_RISK_THRESHOLD) * 0.6,
            Self::LowRisk => 75.0 + (LOW_RISK_THRESHOLD - score) * 0.8,
            Self::Approved => (85.0 + (LOW_RISK_THRESHOLD - score) * 0.5).min(95.0),
        }
    }
}
