use railrisk_core::PredictionRequest;

pub const CLASSIFIER_FEATURES: [&str; 6] = [
    "Vendor ID",
    "Part type",
    "material",
    "Lifetime",
    "Region",
    "Route Type",
];

pub const REGRESSOR_FEATURES: [&str; 10] = [
    "Index",
    "Vendor ID",
    "Part type",
    "lot",
    "material",
    "Warranty",
    "Region",
    "Route Type",
    "days_manuf_to_install",
    "days_install_to_inspect",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub class: i64,
    pub probabilities: Option<Vec<f64>>,
}

/// Feature vector in [`CLASSIFIER_FEATURES`] order.
#[allow(clippy::cast_precision_loss)]
pub fn classifier_features(request: &PredictionRequest) -> Vec<f64> {
    [
        request.vendor_id,
        request.part_type.code,
        request.material,
        request.lifetime_days,
        request.region.code,
        request.route_type.code,
    ]
    .iter()
    .map(|v| *v as f64)
    .collect()
}

/// Feature vector in [`REGRESSOR_FEATURES`] order. The index slot is a
/// placeholder the models were trained with.
#[allow(clippy::cast_precision_loss)]
pub fn regressor_features(request: &PredictionRequest) -> Vec<f64> {
    [
        0,
        request.vendor_id,
        request.part_type.code,
        request.lot_number,
        request.material,
        request.warranty_years,
        request.region.code,
        request.route_type.code,
        request.days_manuf_to_install,
        request.days_install_to_inspect,
    ]
    .iter()
    .map(|v| *v as f64)
    .collect()
}
