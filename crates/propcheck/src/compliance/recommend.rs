use super::classifier::ClassifiedInspection;
use super::domain::{CalculatedStatus, CostRecord, Violation, ViolationSeverity, ViolationStatus};
use serde::Serialize;

const HIGH_COST_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Urgent,
    Planning,
    Optimization,
}

impl RecommendationKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::Planning => "Planning",
            Self::Optimization => "Optimization",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One actionable finding. List order is rule-declaration order and is a
/// user-facing contract, not incidental.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub title: &'static str,
    pub description: String,
    pub action: &'static str,
}

/// Ordered rule evaluation. Rules are independent: each appends zero or
/// one recommendation and none suppresses another.
pub fn recommend(
    inspections: &[ClassifiedInspection],
    violations: &[Violation],
    cost_records: &[CostRecord],
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let overdue = inspections
        .iter()
        .filter(|inspection| inspection.status() == CalculatedStatus::Overdue)
        .count();
    if overdue > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Urgent,
            priority: Priority::High,
            title: "Address Overdue Inspections",
            description: format!(
                "{} inspection{} past due and accruing penalty exposure",
                overdue,
                plural(overdue)
            ),
            action: "Schedule immediately",
        });
    }

    let critical_open = violations
        .iter()
        .filter(|violation| {
            violation.status == ViolationStatus::Open
                && violation.severity == ViolationSeverity::Critical
        })
        .count();
    if critical_open > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Urgent,
            priority: Priority::Critical,
            title: "Resolve Critical Violations",
            description: format!(
                "{} critical violation{} open against the portfolio",
                critical_open,
                plural(critical_open)
            ),
            action: "Assign remediation vendor",
        });
    }

    let due_soon = inspections
        .iter()
        .filter(|inspection| inspection.status() == CalculatedStatus::DueSoon)
        .count();
    if due_soon > 0 {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Planning,
            priority: Priority::Medium,
            title: "Schedule Upcoming Inspections",
            description: format!(
                "{} inspection{} due within the look-ahead window",
                due_soon,
                plural(due_soon)
            ),
            action: "Book vendors this week",
        });
    }

    if !cost_records.is_empty() {
        let total: i64 = cost_records
            .iter()
            .map(|record| record.actual_cost_cents)
            .sum();
        let average = total as f64 / cost_records.len() as f64;
        let threshold = average * HIGH_COST_MULTIPLIER;
        let high_cost = cost_records
            .iter()
            .filter(|record| record.actual_cost_cents as f64 > threshold)
            .count();
        if high_cost > 0 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Optimization,
                priority: Priority::Low,
                title: "Review High-Cost Inspections",
                description: format!(
                    "{} completed inspection{} cost more than 1.5x the portfolio average",
                    high_cost,
                    plural(high_cost)
                ),
                action: "Compare vendor quotes",
            });
        }
    }

    recommendations
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_rule_requires_an_outlier_above_the_mean() {
        // Uniform costs never exceed 1.5x their own average.
        let uniform: Vec<CostRecord> = (0..4)
            .map(|index| CostRecord {
                inspection_id: format!("INS-{index}"),
                actual_cost_cents: 40_000,
            })
            .collect();
        assert!(recommend(&[], &[], &uniform).is_empty());

        let mut skewed = uniform;
        skewed.push(CostRecord {
            inspection_id: "INS-9".to_string(),
            actual_cost_cents: 400_000,
        });
        let recommendations = recommend(&[], &[], &skewed);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].title, "Review High-Cost Inspections");
        assert_eq!(recommendations[0].kind, RecommendationKind::Optimization);
        assert!(recommendations[0].description.starts_with("1 "));
    }
}
