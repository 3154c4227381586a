//! Operating-condition factors shared by the risk scorer and the lifetime
//! adjustment procedure. Factors are fractions of base lifetime.

use crate::category::{REGION_EAST, REGION_SOUTH, REGION_WEST, ROUTE_FREIGHT, ROUTE_HIGH_SPEED};

pub const HIGH_GRADE_MATERIAL_MAX: i64 = 2;
pub const LOW_GRADE_MATERIAL_MIN: i64 = 8;
pub const WARRANTY_BASELINE_YEARS: i64 = 2;
pub const LONG_STORAGE_DAYS: i64 = 90;
pub const QUICK_INSTALL_DAYS: i64 = 15;

pub const fn route_lifetime_factor(route_code: i64) -> f64 {
    match route_code {
        ROUTE_HIGH_SPEED => -0.25,
        ROUTE_FREIGHT => -0.15,
        _ => 0.0,
    }
}

pub const fn regional_lifetime_factor(region_code: i64) -> f64 {
    match region_code {
        REGION_SOUTH => -0.05,
        REGION_EAST => -0.10,
        REGION_WEST => 0.05,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialGrade {
    High,
    Standard,
    Low,
}

impl MaterialGrade {
    pub const fn of(material: i64) -> Self {
        if material <= HIGH_GRADE_MATERIAL_MAX {
            Self::High
        } else if material >= LOW_GRADE_MATERIAL_MIN {
            Self::Low
        } else {
            Self::Standard
        }
    }

    pub const fn lifetime_factor(self) -> f64 {
        match self {
            Self::High => 0.15,
            Self::Standard => 0.0,
            Self::Low => -0.20,
        }
    }
}

/// Each warranty year above or below the baseline moves lifetime by 10%.
#[allow(clippy::cast_precision_loss)]
pub fn warranty_lifetime_factor(warranty_years: i64) -> f64 {
    (warranty_years as f64 - WARRANTY_BASELINE_YEARS as f64) * 0.1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageDelay {
    Quick,
    Normal,
    Extended,
}

impl StorageDelay {
    pub const fn of(days_manuf_to_install: i64) -> Self {
        if days_manuf_to_install > LONG_STORAGE_DAYS {
            Self::Extended
        } else if days_manuf_to_install < QUICK_INSTALL_DAYS {
            Self::Quick
        } else {
            Self::Normal
        }
    }

    pub const fn lifetime_factor(self) -> f64 {
        match self {
            Self::Quick => 0.02,
            Self::Normal => 0.0,
            Self::Extended => -0.05,
        }
    }
}
