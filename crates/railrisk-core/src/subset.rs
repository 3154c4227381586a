use serde::Serialize;

use crate::record::{ComponentRecord, PredictionRequest};

pub const DEFAULT_BASE_LIFETIME_DAYS: f64 = 1200.0;
pub const DEFAULT_DEFECT_RATE: f64 = 10.0;

/// Aggregate statistics over a non-empty run of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubsetStats {
    pub samples: usize,
    pub defects: usize,
    /// Percentage of records with the defect flag set.
    pub defect_rate: f64,
    pub mean_lifetime: f64,
}

impl SubsetStats {
    /// Returns `None` for an empty input.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ComponentRecord>,
    {
        let mut samples = 0_usize;
        let mut defects = 0_usize;
        // Summed as f64 so extreme lifetimes cannot overflow.
        let mut lifetime_sum = 0.0_f64;
        for record in records {
            samples += 1;
            if record.defect {
                defects += 1;
            }
            lifetime_sum += record.lifetime_days as f64;
        }
        if samples == 0 {
            return None;
        }
        Some(Self {
            samples,
            defects,
            defect_rate: defects as f64 / samples as f64 * 100.0,
            mean_lifetime: lifetime_sum / samples as f64,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Similar,
    PartType,
    Default,
}

impl MatchTier {
    pub const fn confidence_base(self) -> f64 {
        match self {
            Self::Exact => 90.0,
            Self::Similar => 75.0,
            Self::PartType => 60.0,
            Self::Default => 40.0,
        }
    }
}

/// Baseline statistics taken from the best non-empty subset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub tier: MatchTier,
    pub stats: Option<SubsetStats>,
    pub base_lifetime: f64,
    pub defect_rate: f64,
    pub confidence_base: f64,
}

impl Baseline {
    pub const fn samples(&self) -> usize {
        match self.stats {
            Some(stats) => stats.samples,
            None => 0,
        }
    }

    pub fn data_source(&self) -> String {
        let n = self.samples();
        match self.tier {
            MatchTier::Exact => format!("exact matches ({n} components)"),
            MatchTier::Similar => format!("similar components ({n} components)"),
            MatchTier::PartType => format!("part type average ({n} components)"),
            MatchTier::Default => "default estimate (no historical data)".to_string(),
        }
    }
}

/// The nested exact / similar / part-type subsets for one request.
///
/// Each subset is a superset of the previous one, so all three are filled
/// in a single linear scan.
#[derive(Debug, Clone, Default)]
pub struct SubsetSelection<'a> {
    pub exact: Vec<&'a ComponentRecord>,
    pub similar: Vec<&'a ComponentRecord>,
    pub part_type: Vec<&'a ComponentRecord>,
}

impl<'a> SubsetSelection<'a> {
    pub fn select(records: &'a [ComponentRecord], request: &PredictionRequest) -> Self {
        let mut selection = Self::default();
        for record in records {
            if !request.matches_part_type(record) {
                continue;
            }
            selection.part_type.push(record);
            if !request.matches_similar(record) {
                continue;
            }
            selection.similar.push(record);
            if request.matches_exact(record) {
                selection.exact.push(record);
            }
        }
        selection
    }

    pub fn exact_stats(&self) -> Option<SubsetStats> {
        SubsetStats::from_records(self.exact.iter().copied())
    }

    pub fn similar_stats(&self) -> Option<SubsetStats> {
        SubsetStats::from_records(self.similar.iter().copied())
    }

    pub fn part_type_stats(&self) -> Option<SubsetStats> {
        SubsetStats::from_records(self.part_type.iter().copied())
    }

    /// First non-empty tier wins; with no rows at all the documented
    /// defaults apply.
    pub fn baseline(&self) -> Baseline {
        let tiers = [
            (MatchTier::Exact, self.exact_stats()),
            (MatchTier::Similar, self.similar_stats()),
            (MatchTier::PartType, self.part_type_stats()),
        ];
        for (tier, stats) in tiers {
            if let Some(stats) = stats {
                return Baseline {
                    tier,
                    stats: Some(stats),
                    base_lifetime: stats.mean_lifetime,
                    defect_rate: stats.defect_rate,
                    confidence_base: tier.confidence_base(),
                };
            }
        }
        Baseline {
            tier: MatchTier::Default,
            stats: None,
            base_lifetime: DEFAULT_BASE_LIFETIME_DAYS,
            defect_rate: DEFAULT_DEFECT_RATE,
            confidence_base: MatchTier::Default.confidence_base(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::PART_TYPES;

    fn record(
        vendor_id: i64,
        part_type: i64,
        material: i64,
        defect: bool,
        lifetime: i64,
    ) -> ComponentRecord {
        ComponentRecord {
            vendor_id,
            part_type,
            material,
            defect,
            lifetime_days: lifetime,
            region: 1,
            route_type: 2,
            warranty_years: 2,
        }
    }

    #[test]
    fn exact_subset_wins_even_when_smaller() {
        let records = vec![
            record(100, 1, 1, false, 1000),
            record(200, 1, 1, true, 400),
            record(300, 1, 1, true, 400),
            record(400, 1, 1, true, 400),
        ];
        let request = PredictionRequest::default();
        let selection = SubsetSelection::select(&records, &request);
        assert_eq!(selection.exact.len(), 1);
        assert_eq!(selection.similar.len(), 4);

        let baseline = selection.baseline();
        assert_eq!(baseline.tier, MatchTier::Exact);
        assert!((baseline.base_lifetime - 1000.0).abs() < f64::EPSILON);
        assert!(baseline.defect_rate.abs() < f64::EPSILON);
        assert!((baseline.confidence_base - 90.0).abs() < f64::EPSILON);
        assert_eq!(baseline.data_source(), "exact matches (1 components)");
    }

    #[test]
    fn cascade_falls_through_tiers() {
        let records = vec![record(200, 1, 5, true, 600), record(200, 1, 5, false, 1000)];
        let request = PredictionRequest::default();
        let baseline = SubsetSelection::select(&records, &request).baseline();
        assert_eq!(baseline.tier, MatchTier::PartType);
        assert!((baseline.defect_rate - 50.0).abs() < 1e-9);
        assert!((baseline.base_lifetime - 800.0).abs() < 1e-9);
        assert!((baseline.confidence_base - 60.0).abs() < f64::EPSILON);

        let request = PredictionRequest {
            vendor_id: 999,
            material: 5,
            ..PredictionRequest::default()
        };
        let baseline = SubsetSelection::select(&records, &request).baseline();
        assert_eq!(baseline.tier, MatchTier::Similar);
        assert_eq!(baseline.data_source(), "similar components (2 components)");
    }

    #[test]
    fn no_rows_uses_defaults() {
        let records = vec![record(100, 3, 1, false, 2000)];
        let request = PredictionRequest {
            part_type: PART_TYPES.resolve("Liner"),
            ..PredictionRequest::default()
        };
        let baseline = SubsetSelection::select(&records, &request).baseline();
        assert_eq!(baseline.tier, MatchTier::Default);
        assert!((baseline.base_lifetime - DEFAULT_BASE_LIFETIME_DAYS).abs() < f64::EPSILON);
        assert!((baseline.defect_rate - DEFAULT_DEFECT_RATE).abs() < f64::EPSILON);
        assert!((baseline.confidence_base - 40.0).abs() < f64::EPSILON);
        assert_eq!(baseline.data_source(), "default estimate (no historical data)");
    }

    #[test]
    fn empty_stats_are_none() {
        assert!(SubsetStats::from_records(std::iter::empty()).is_none());
    }

    #[test]
    fn extreme_lifetimes_do_not_overflow() {
        let records = [record(100, 1, 1, false, i64::MAX), record(100, 1, 1, true, i64::MAX)];
        let stats = SubsetStats::from_records(&records).expect("non-empty");
        assert_eq!(stats.samples, 2);
        assert!((stats.mean_lifetime - i64::MAX as f64).abs() < 1e4);
        assert!((stats.defect_rate - 50.0).abs() < 1e-9);
    }
}
