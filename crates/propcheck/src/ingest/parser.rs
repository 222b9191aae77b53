use super::IngestError;
use crate::compliance::domain::{
    ComplianceCategory, CostRange, CostRecord, Frequency, InspectionRecord, RawStatus, Violation,
    ViolationSeverity, ViolationStatus,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_inspections<R: Read>(reader: R) -> Result<Vec<InspectionRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<InspectionRow>().enumerate() {
        let line = index + 2;
        records.push(row?.into_record(line)?);
    }

    Ok(records)
}

pub(crate) fn parse_violations<R: Read>(reader: R) -> Result<Vec<Violation>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut violations = Vec::new();

    for (index, row) in csv_reader.deserialize::<ViolationRow>().enumerate() {
        let line = index + 2;
        violations.push(row?.into_violation(line)?);
    }

    Ok(violations)
}

pub(crate) fn parse_cost_records<R: Read>(reader: R) -> Result<Vec<CostRecord>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut costs = Vec::new();

    for row in csv_reader.deserialize::<CostRow>() {
        let row = row?;
        costs.push(CostRecord {
            inspection_id: row.inspection_id,
            actual_cost_cents: row.actual_cost_cents,
        });
    }

    Ok(costs)
}

#[derive(Debug, Deserialize)]
struct InspectionRow {
    #[serde(rename = "Inspection ID")]
    id: String,
    #[serde(rename = "Property ID")]
    property_id: String,
    #[serde(rename = "Inspection Type")]
    inspection_type: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Authority", default)]
    authority: String,
    #[serde(rename = "Frequency", default)]
    frequency: String,
    #[serde(rename = "Next Due Date")]
    next_due_date: String,
    #[serde(rename = "Last Completed Date", default, deserialize_with = "empty_string_as_none")]
    last_completed_date: Option<String>,
    #[serde(rename = "Status", default)]
    status: String,
    #[serde(rename = "Estimated Cost Min", default)]
    estimated_cost_min: i64,
    #[serde(rename = "Estimated Cost Max", default)]
    estimated_cost_max: i64,
    #[serde(rename = "Property Address", default)]
    property_address: String,
}

impl InspectionRow {
    fn into_record(self, line: usize) -> Result<InspectionRecord, IngestError> {
        if self.id.is_empty() || self.property_id.is_empty() {
            return Err(IngestError::InvalidRecord {
                line,
                reason: "inspection and property identifiers are required".to_string(),
            });
        }

        let next_due_date = parse_date("Next Due Date", &self.next_due_date)?;
        let last_completed_date = self
            .last_completed_date
            .as_deref()
            .map(|value| parse_date("Last Completed Date", value))
            .transpose()?;

        Ok(InspectionRecord {
            id: self.id,
            property_id: self.property_id,
            inspection_type: self.inspection_type,
            category: ComplianceCategory::parse(&self.category),
            authority: self.authority,
            frequency: Frequency::parse(&self.frequency),
            next_due_date,
            last_completed_date,
            raw_status: RawStatus::parse(&self.status),
            estimated_cost: CostRange {
                min_cents: self.estimated_cost_min,
                max_cents: self.estimated_cost_max,
            },
            property_address: self.property_address,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ViolationRow {
    #[serde(rename = "Violation ID")]
    id: String,
    #[serde(rename = "Property ID")]
    property_id: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Severity", default, deserialize_with = "empty_string_as_none")]
    severity: Option<String>,
    #[serde(rename = "Risk Category", default, deserialize_with = "empty_string_as_none")]
    risk_category: Option<String>,
    #[serde(rename = "Issued Date")]
    issued_date: String,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Resolved Date", default, deserialize_with = "empty_string_as_none")]
    resolved_date: Option<String>,
}

impl ViolationRow {
    fn into_violation(self, line: usize) -> Result<Violation, IngestError> {
        if self.id.is_empty() || self.property_id.is_empty() {
            return Err(IngestError::InvalidRecord {
                line,
                reason: "violation and property identifiers are required".to_string(),
            });
        }

        // Jurisdiction feeds ship a risk category instead of a severity;
        // normalize to the four ordinal tiers before the engine sees it.
        let severity = match (self.severity.as_deref(), self.risk_category.as_deref()) {
            (Some(value), _) => ViolationSeverity::parse(value).ok_or_else(|| {
                IngestError::InvalidRecord {
                    line,
                    reason: format!("unknown severity '{value}'"),
                }
            })?,
            (None, Some(category)) => ViolationSeverity::from_risk_category(category),
            (None, None) => {
                return Err(IngestError::InvalidRecord {
                    line,
                    reason: "a severity or risk category is required".to_string(),
                })
            }
        };

        let status = match self.status.to_ascii_lowercase().as_str() {
            "open" => ViolationStatus::Open,
            "closed" => ViolationStatus::Closed,
            other => {
                return Err(IngestError::InvalidRecord {
                    line,
                    reason: format!("unknown violation status '{other}'"),
                })
            }
        };

        let issued_date = parse_date("Issued Date", &self.issued_date)?;
        let resolved_date = self
            .resolved_date
            .as_deref()
            .map(|value| parse_date("Resolved Date", value))
            .transpose()?;

        Ok(Violation {
            id: self.id,
            property_id: self.property_id,
            category: self.category,
            severity,
            issued_date,
            status,
            resolved_date,
        })
    }
}

#[derive(Debug, Deserialize)]
struct CostRow {
    #[serde(rename = "Inspection ID")]
    inspection_id: String,
    #[serde(rename = "Actual Cost")]
    actual_cost_cents: i64,
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, IngestError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| IngestError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const INSPECTION_HEADER: &str = "Inspection ID,Property ID,Inspection Type,Category,Authority,Frequency,Next Due Date,Last Completed Date,Status,Estimated Cost Min,Estimated Cost Max,Property Address\n";

    #[test]
    fn inspection_rows_parse_with_lenient_enums() {
        let csv = format!(
            "{INSPECTION_HEADER}INS-1,PROP-9,Fire Alarm System Inspection,Fire Safety,Fire Department,every-two-weeks,2025-08-01,,Pending Review,30000,80000,\"120 Broadway, New York\"\n"
        );
        let records =
            parse_inspections(Cursor::new(csv.into_bytes())).expect("inspection row parses");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].frequency, Frequency::Annual);
        assert_eq!(records[0].raw_status, RawStatus::Scheduled);
        assert_eq!(records[0].category, ComplianceCategory::FireSafety);
    }

    #[test]
    fn malformed_due_date_is_rejected_at_the_boundary() {
        let csv = format!(
            "{INSPECTION_HEADER}INS-1,PROP-9,Boiler Inspection,Building Systems,DOB,Annual,08/01/2025,,Scheduled,0,0,120 Broadway\n"
        );
        let err = parse_inspections(Cursor::new(csv.into_bytes()))
            .expect_err("US-format date rejected");
        assert!(matches!(
            err,
            IngestError::InvalidDate {
                field: "Next Due Date",
                ..
            }
        ));
    }

    #[test]
    fn risk_category_substitutes_for_missing_severity() {
        let csv = "Violation ID,Property ID,Category,Severity,Risk Category,Issued Date,Status,Resolved Date\n\
                   V-1,PROP-9,Facade,,FIRE,2025-06-01,Open,\n\
                   V-2,PROP-9,Facade,,UNKNOWN_CODE,2025-06-02,Open,\n";
        let violations = parse_violations(Cursor::new(csv.as_bytes())).expect("rows parse");
        assert_eq!(violations[0].severity, ViolationSeverity::Critical);
        assert_eq!(violations[1].severity, ViolationSeverity::Medium);
    }
}
