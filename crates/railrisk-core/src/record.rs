use serde::Serialize;

use crate::category::{Category, PART_TYPES, REGIONS, ROUTE_TYPES};

pub const DEFAULT_VENDOR_ID: i64 = 100;
pub const DEFAULT_PART_TYPE: &str = "Rail Clips";
pub const DEFAULT_MATERIAL: i64 = 1;
pub const DEFAULT_LIFETIME_DAYS: i64 = 1000;
pub const DEFAULT_LOT_NUMBER: i64 = 1001;
pub const DEFAULT_WARRANTY_YEARS: i64 = 2;
pub const DEFAULT_REGION: &str = "North";
pub const DEFAULT_ROUTE_TYPE: &str = "Passenger";
pub const DEFAULT_DAYS_MANUF_TO_INSTALL: i64 = 30;
pub const DEFAULT_DAYS_INSTALL_TO_INSPECT: i64 = 90;

/// One row of historical reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    pub vendor_id: i64,
    pub part_type: i64,
    pub material: i64,
    pub defect: bool,
    pub lifetime_days: i64,
    pub region: i64,
    pub route_type: i64,
    pub warranty_years: i64,
}

/// Attributes of the component being evaluated.
///
/// `lifetime_days` is the caller's expected lifetime and drives the risk
/// flows; `warranty_years`, `lot_number` and the timing fields feed the
/// lifetime flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub vendor_id: i64,
    pub part_type: Category,
    pub material: i64,
    pub lifetime_days: i64,
    pub warranty_years: i64,
    pub lot_number: i64,
    pub region: Category,
    pub route_type: Category,
    pub days_manuf_to_install: i64,
    pub days_install_to_inspect: i64,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            vendor_id: DEFAULT_VENDOR_ID,
            part_type: PART_TYPES.resolve(DEFAULT_PART_TYPE),
            material: DEFAULT_MATERIAL,
            lifetime_days: DEFAULT_LIFETIME_DAYS,
            warranty_years: DEFAULT_WARRANTY_YEARS,
            lot_number: DEFAULT_LOT_NUMBER,
            region: REGIONS.resolve(DEFAULT_REGION),
            route_type: ROUTE_TYPES.resolve(DEFAULT_ROUTE_TYPE),
            days_manuf_to_install: DEFAULT_DAYS_MANUF_TO_INSTALL,
            days_install_to_inspect: DEFAULT_DAYS_INSTALL_TO_INSPECT,
        }
    }
}

impl PredictionRequest {
    pub fn matches_exact(&self, record: &ComponentRecord) -> bool {
        record.vendor_id == self.vendor_id && self.matches_similar(record)
    }

    pub fn matches_similar(&self, record: &ComponentRecord) -> bool {
        record.material == self.material && self.matches_part_type(record)
    }

    pub fn matches_part_type(&self, record: &ComponentRecord) -> bool {
        record.part_type == self.part_type.code
    }
}
