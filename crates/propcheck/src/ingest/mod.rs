mod parser;

use crate::compliance::domain::{CostRecord, InspectionRecord, Violation};
use std::io::Read;
use std::path::Path;

/// Validation errors raised while importing data-store exports. Nothing
/// malformed crosses this boundary; the engine behind it is total over
/// well-formed records.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid export data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid date in field '{field}': '{value}' is not YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid record on line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },
}

/// Imports CSV exports of the external data store into validated domain
/// records.
pub struct ComplianceExportImporter;

impl ComplianceExportImporter {
    pub fn inspections_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<InspectionRecord>, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::inspections_from_reader(file)
    }

    pub fn inspections_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<InspectionRecord>, IngestError> {
        parser::parse_inspections(reader)
    }

    pub fn violations_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Violation>, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::violations_from_reader(file)
    }

    pub fn violations_from_reader<R: Read>(reader: R) -> Result<Vec<Violation>, IngestError> {
        parser::parse_violations(reader)
    }

    pub fn cost_records_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<CostRecord>, IngestError> {
        let file = std::fs::File::open(path)?;
        Self::cost_records_from_reader(file)
    }

    pub fn cost_records_from_reader<R: Read>(reader: R) -> Result<Vec<CostRecord>, IngestError> {
        parser::parse_cost_records(reader)
    }
}
