use super::domain::{InspectionRecord, Violation};
use serde::{Deserialize, Serialize};

/// Record counts for one caller-supplied reporting period. Period
/// boundaries are the caller's concern; the analyzer only compares counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCounts {
    pub inspections: usize,
    pub violations: usize,
}

impl PeriodCounts {
    pub fn from_records(inspections: &[InspectionRecord], violations: &[Violation]) -> Self {
        Self {
            inspections: inspections.len(),
            violations: violations.len(),
        }
    }
}

/// Period-over-period percentage deltas. A rise in violations reads as an
/// inverse signal on compliance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendSnapshot {
    pub inspection_delta_pct: f64,
    pub violation_delta_pct: f64,
    pub compliance_delta_pct: f64,
}

pub fn trend(current: &PeriodCounts, prior: &PeriodCounts) -> TrendSnapshot {
    let inspection_delta_pct = delta_pct(current.inspections, prior.inspections);
    let violation_delta_pct = delta_pct(current.violations, prior.violations);

    TrendSnapshot {
        inspection_delta_pct,
        violation_delta_pct,
        compliance_delta_pct: -violation_delta_pct,
    }
}

/// Defined as 0% change when the prior period is empty; the comparison is
/// meaningless there and must not raise.
fn delta_pct(current: usize, prior: usize) -> f64 {
    if prior == 0 {
        return 0.0;
    }

    (current as f64 - prior as f64) / prior as f64 * 100.0
}
