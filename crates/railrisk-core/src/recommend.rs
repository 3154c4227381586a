use crate::verdict::{Status, Verdict};

/// Facts beyond the verdict that switch on the optional recommendations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationContext {
    /// Failed components among exact historical matches.
    pub exact_failures: usize,
    /// Vendor has history and none of it is defective.
    pub vendor_spotless: bool,
    pub expected_lifetime_days: f64,
}

pub fn recommendations(
    verdict: Verdict,
    confidence: f64,
    context: &RecommendationContext,
) -> Vec<String> {
    match verdict.status() {
        Status::Fail => {
            let mut out = vec![
                format!("HIGH FAILURE RISK: {confidence:.1}% confidence"),
                "Strongly recommend alternative vendor/specification".to_string(),
                "Mandatory enhanced quality testing required".to_string(),
                "Consider different material grade or part type".to_string(),
                "Immediate inspection required if installed".to_string(),
            ];
            if context.exact_failures > 0 {
                out.push(format!(
                    "Historical data shows {} identical components with issues",
                    context.exact_failures
                ));
            }
            out
        }
        Status::Warning => vec![
            format!("MODERATE RISK: {confidence:.1}% confidence"),
            "Enhanced monitoring recommended".to_string(),
            "Increase inspection frequency by 100%".to_string(),
            "Consider backup components".to_string(),
            "Document performance closely".to_string(),
        ],
        Status::Pass => {
            let mut out = vec![
                format!("COMPONENT APPROVED: {confidence:.1}% confidence"),
                "Follow standard maintenance procedures".to_string(),
                "Regular monitoring as scheduled".to_string(),
                format!(
                    "Expected service life: {:.1} years",
                    context.expected_lifetime_days / 365.0
                ),
            ];
            if context.vendor_spotless {
                out.push("Vendor has excellent quality track record".to_string());
            }
            out
        }
    }
}

/// Recommendations for a classifier verdict (pass / broke).
pub fn classifier_recommendations(
    passed: bool,
    confidence: f64,
    historical_defect_rate: f64,
) -> Vec<String> {
    if !passed {
        let mut out = vec![
            "🚨 Component predicted to break - immediate action required".to_string(),
            "Schedule urgent inspection within 7 days".to_string(),
            "Consider immediate replacement".to_string(),
            "Increase monitoring frequency".to_string(),
        ];
        if historical_defect_rate > 10.0 {
            out.push("⚠️ Consider alternative vendor".to_string());
        }
        out
    } else if confidence < 70.0 {
        vec![
            "⚠️ Low confidence - monitor closely".to_string(),
            "Schedule inspection within 30 days".to_string(),
        ]
    } else {
        vec![
            "✅ Component likely to perform well".to_string(),
            "Continue standard monitoring".to_string(),
        ]
    }
}
