use crate::record::{ComponentRecord, PredictionRequest};
use crate::subset::{SubsetStats, DEFAULT_BASE_LIFETIME_DAYS};

pub const UNKNOWN_VENDOR_DEFECT_RATE: f64 = 20.0;
pub const UNKNOWN_VENDOR_LIFETIME_DAYS: f64 = 1000.0;
pub const UNKNOWN_DIMENSION_DEFECT_RATE: f64 = 15.0;

/// Defect history along one attribute (vendor, part type, ...), with the
/// fallback used when the attribute value never occurs in the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionProfile {
    pub stats: Option<SubsetStats>,
    pub fallback_defect_rate: f64,
    pub fallback_lifetime: f64,
}

impl DimensionProfile {
    fn scan<F>(
        records: &[ComponentRecord],
        fallback_defect_rate: f64,
        fallback_lifetime: f64,
        keep: F,
    ) -> Self
    where
        F: Fn(&ComponentRecord) -> bool,
    {
        Self {
            stats: SubsetStats::from_records(records.iter().filter(|r| keep(r))),
            fallback_defect_rate,
            fallback_lifetime,
        }
    }

    pub const fn is_known(&self) -> bool {
        self.stats.is_some()
    }

    pub const fn samples(&self) -> usize {
        match self.stats {
            Some(stats) => stats.samples,
            None => 0,
        }
    }

    pub fn defect_rate(&self) -> f64 {
        self.stats.map_or(self.fallback_defect_rate, |s| s.defect_rate)
    }

    pub fn mean_lifetime(&self) -> f64 {
        self.stats.map_or(self.fallback_lifetime, |s| s.mean_lifetime)
    }

    /// Known and never defective.
    pub fn is_spotless(&self) -> bool {
        self.stats.is_some_and(|s| s.defects == 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryProfiles {
    pub vendor: DimensionProfile,
    pub part_type: DimensionProfile,
    pub material: DimensionProfile,
    pub route: DimensionProfile,
}

impl HistoryProfiles {
    pub fn build(records: &[ComponentRecord], request: &PredictionRequest) -> Self {
        Self {
            vendor: DimensionProfile::scan(
                records,
                UNKNOWN_VENDOR_DEFECT_RATE,
                UNKNOWN_VENDOR_LIFETIME_DAYS,
                |r| r.vendor_id == request.vendor_id,
            ),
            part_type: DimensionProfile::scan(
                records,
                UNKNOWN_DIMENSION_DEFECT_RATE,
                DEFAULT_BASE_LIFETIME_DAYS,
                |r| r.part_type == request.part_type.code,
            ),
            material: DimensionProfile::scan(
                records,
                UNKNOWN_DIMENSION_DEFECT_RATE,
                DEFAULT_BASE_LIFETIME_DAYS,
                |r| r.material == request.material,
            ),
            route: DimensionProfile::scan(
                records,
                UNKNOWN_DIMENSION_DEFECT_RATE,
                DEFAULT_BASE_LIFETIME_DAYS,
                |r| r.route_type == request.route_type.code,
            ),
        }
    }
}
