use super::classifier::ClassifiedInspection;
use super::domain::{CalculatedStatus, Violation, ViolationSeverity, ViolationStatus};
use serde::Serialize;

const OVERDUE_WEIGHT: usize = 25;
const CRITICAL_VIOLATION_WEIGHT: usize = 30;
const DUE_SOON_WEIGHT: usize = 10;
const MAX_SCORE: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Thresholds evaluated high to low, first match wins.
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Critical
        } else if score >= 50 {
            Self::High
        } else if score >= 25 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Contributing factor counts behind a score, kept for drill-down views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub overdue_inspections: usize,
    pub critical_open_violations: usize,
    pub due_soon_inspections: usize,
}

/// Point-in-time risk snapshot for a property or portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub breakdown: RiskBreakdown,
}

/// Aggregates classified inspections and violations into a bounded risk
/// score. Empty input yields score 0 / Low.
pub fn assess(inspections: &[ClassifiedInspection], violations: &[Violation]) -> RiskAssessment {
    let breakdown = RiskBreakdown {
        overdue_inspections: inspections
            .iter()
            .filter(|inspection| inspection.status() == CalculatedStatus::Overdue)
            .count(),
        critical_open_violations: violations
            .iter()
            .filter(|violation| {
                violation.status == ViolationStatus::Open
                    && violation.severity == ViolationSeverity::Critical
            })
            .count(),
        due_soon_inspections: inspections
            .iter()
            .filter(|inspection| inspection.status() == CalculatedStatus::DueSoon)
            .count(),
    };

    let raw = breakdown.overdue_inspections * OVERDUE_WEIGHT
        + breakdown.critical_open_violations * CRITICAL_VIOLATION_WEIGHT
        + breakdown.due_soon_inspections * DUE_SOON_WEIGHT;
    let score = raw.min(MAX_SCORE) as u8;

    RiskAssessment {
        score,
        level: RiskLevel::from_score(score),
        breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_thresholds_first_match_wins() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(24), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(25), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(79), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(80), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Critical);
    }

    #[test]
    fn empty_input_scores_zero() {
        let assessment = assess(&[], &[]);
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(assessment.breakdown, RiskBreakdown::default());
    }
}
