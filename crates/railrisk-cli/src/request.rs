use railrisk_core::{
    Category, CategoryTable, PredictionRequest, DEFAULT_DAYS_INSTALL_TO_INSPECT,
    DEFAULT_DAYS_MANUF_TO_INSTALL, DEFAULT_LIFETIME_DAYS, DEFAULT_LOT_NUMBER, DEFAULT_MATERIAL,
    DEFAULT_PART_TYPE, DEFAULT_REGION, DEFAULT_ROUTE_TYPE, DEFAULT_VENDOR_ID,
    DEFAULT_WARRANTY_YEARS, PART_TYPES, REGIONS, ROUTE_TYPES,
};
use tracing::debug;

use crate::cli::{AssessArgs, ComponentArgs, LifetimeArgs};
use crate::error::InputError;

fn int(field: &'static str, raw: Option<&str>, default: i64) -> Result<i64, InputError> {
    raw.map_or(Ok(default), |value| {
        value
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::InvalidNumber {
                field,
                value: value.to_string(),
            })
    })
}

fn category(table: &CategoryTable, raw: Option<&str>, default: &str) -> Category {
    let category = table.resolve(raw.unwrap_or(default));
    if table.label_for(category.code).is_none() {
        debug!(
            table = table.name,
            label = %category.label,
            code = category.code,
            "code outside known table"
        );
    }
    category
}

impl ComponentArgs {
    pub fn to_request(&self) -> Result<PredictionRequest, InputError> {
        Ok(PredictionRequest {
            vendor_id: int("vendor_id", self.vendor_id.as_deref(), DEFAULT_VENDOR_ID)?,
            part_type: category(&PART_TYPES, self.part_type.as_deref(), DEFAULT_PART_TYPE),
            material: int("material", self.material.as_deref(), DEFAULT_MATERIAL)?,
            lifetime_days: int("lifetime", self.lifetime.as_deref(), DEFAULT_LIFETIME_DAYS)?,
            region: category(&REGIONS, self.region.as_deref(), DEFAULT_REGION),
            route_type: category(&ROUTE_TYPES, self.route_type.as_deref(), DEFAULT_ROUTE_TYPE),
            ..PredictionRequest::default()
        })
    }
}

impl AssessArgs {
    pub fn to_request(&self) -> Result<PredictionRequest, InputError> {
        Ok(PredictionRequest {
            days_manuf_to_install: int(
                "days_manuf_to_install",
                self.days_manuf_to_install.as_deref(),
                DEFAULT_DAYS_MANUF_TO_INSTALL,
            )?,
            ..self.component.to_request()?
        })
    }
}

impl LifetimeArgs {
    pub fn to_request(&self) -> Result<PredictionRequest, InputError> {
        Ok(PredictionRequest {
            vendor_id: int("vendor_id", self.vendor_id.as_deref(), DEFAULT_VENDOR_ID)?,
            part_type: category(&PART_TYPES, self.part_type.as_deref(), DEFAULT_PART_TYPE),
            lot_number: int("lot_number", self.lot_number.as_deref(), DEFAULT_LOT_NUMBER)?,
            material: int("material", self.material.as_deref(), DEFAULT_MATERIAL)?,
            warranty_years: int(
                "warranty_years",
                self.warranty_years.as_deref(),
                DEFAULT_WARRANTY_YEARS,
            )?,
            region: category(&REGIONS, self.region.as_deref(), DEFAULT_REGION),
            route_type: category(&ROUTE_TYPES, self.route_type.as_deref(), DEFAULT_ROUTE_TYPE),
            days_manuf_to_install: int(
                "days_manuf_to_install",
                self.days_manuf_to_install.as_deref(),
                DEFAULT_DAYS_MANUF_TO_INSTALL,
            )?,
            days_install_to_inspect: int(
                "days_install_to_inspect",
                self.days_install_to_inspect.as_deref(),
                DEFAULT_DAYS_INSTALL_TO_INSPECT,
            )?,
            ..PredictionRequest::default()
        })
    }
}
