use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use railrisk_core::ComponentRecord;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open reference data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed reference data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid value {value:?} in column {column:?} at data row {row}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

/// Column layout of the reference CSV. Extra columns are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Vendor ID")]
    vendor_id: i64,
    #[serde(rename = "Part type")]
    part_type: i64,
    #[serde(rename = "material")]
    material: i64,
    #[serde(rename = "Defect")]
    defect: i64,
    #[serde(rename = "Lifetime (Days)")]
    lifetime_days: i64,
    #[serde(rename = "Region")]
    region: i64,
    #[serde(rename = "Route Type")]
    route_type: i64,
    #[serde(rename = "Warranty (Years)")]
    warranty_years: i64,
}

impl RawRecord {
    fn into_record(self, row: usize) -> Result<ComponentRecord, DataError> {
        let defect = match self.defect {
            0 => false,
            1 => true,
            other => {
                return Err(DataError::InvalidValue {
                    row,
                    column: "Defect",
                    value: other.to_string(),
                })
            }
        };
        Ok(ComponentRecord {
            vendor_id: self.vendor_id,
            part_type: self.part_type,
            material: self.material,
            defect,
            lifetime_days: self.lifetime_days,
            region: self.region,
            route_type: self.route_type,
            warranty_years: self.warranty_years,
        })
    }
}

/// Reads every row of the reference CSV at `path`, in file order.
pub fn load_reference_data(path: impl AsRef<Path>) -> Result<Vec<ComponentRecord>, DataError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_reference_data(file)?;
    debug!(path = %path.display(), rows = records.len(), "loaded reference data");
    Ok(records)
}

pub fn read_reference_data<R: Read>(reader: R) -> Result<Vec<ComponentRecord>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RawRecord>().enumerate() {
        records.push(row?.into_record(i + 1)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "Vendor ID,Part type,lot,material,Defect,Lifetime (Days),Region,Route Type,Warranty (Years)\n";

    #[test]
    fn parses_rows_in_order_and_ignores_extra_columns() {
        let csv = format!("{HEADER}100,1,1001,1,0,1400,1,2,3\n200, 2 ,2001,3,1,600,4,3,2\n");
        let records = read_reference_data(csv.as_bytes()).expect("parse");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].vendor_id, 100);
        assert!(!records[0].defect);
        assert_eq!(records[1].part_type, 2);
        assert!(records[1].defect);
        assert_eq!(records[1].lifetime_days, 600);
    }

    #[test]
    fn header_only_is_empty() {
        let records = read_reference_data(HEADER.as_bytes()).expect("parse");
        assert!(records.is_empty());
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Vendor ID,Part type,material,Defect\n100,1,1,0\n";
        let err = read_reference_data(csv.as_bytes()).expect_err("missing columns");
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn non_numeric_field_is_an_error() {
        let csv = format!("{HEADER}100,1,1001,one,0,1400,1,2,3\n");
        let err = read_reference_data(csv.as_bytes()).expect_err("non numeric");
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn defect_flag_must_be_binary() {
        let csv = format!("{HEADER}100,1,1001,1,0,1400,1,2,3\n100,1,1001,1,2,1400,1,2,3\n");
        let err = read_reference_data(csv.as_bytes()).expect_err("bad defect");
        match err {
            DataError::InvalidValue { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "Defect");
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_reference_data("/definitely/not/here.csv").expect_err("missing file");
        assert!(err.to_string().contains("/definitely/not/here.csv"));
    }
}
