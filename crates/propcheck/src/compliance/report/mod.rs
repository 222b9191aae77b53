pub mod views;

use super::classifier::{classify_all, ClassifierConfig};
use super::domain::{CostRecord, InspectionRecord, Violation};
use super::recommend::{recommend, Recommendation};
use super::risk::{assess, RiskAssessment};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use views::InspectionStatusView;

/// One fetched snapshot of a property or portfolio. Derives `PartialEq`
/// so callers can compare the previous and new snapshot and skip
/// recomputation when nothing changed; the engine itself holds no state
/// between calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineInput {
    #[serde(default)]
    pub inspections: Vec<InspectionRecord>,
    #[serde(default)]
    pub violations: Vec<Violation>,
    #[serde(default)]
    pub cost_records: Vec<CostRecord>,
}

/// Everything the dashboard needs for one property or portfolio: enriched
/// inspection rows, the risk snapshot, and the prioritized findings.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioOverview {
    pub today: NaiveDate,
    pub due_soon_window_days: i64,
    pub inspections: Vec<InspectionStatusView>,
    pub risk: RiskAssessment,
    pub recommendations: Vec<Recommendation>,
}

impl PortfolioOverview {
    pub fn build(input: &EngineInput, today: NaiveDate, config: &ClassifierConfig) -> Self {
        let classified = classify_all(&input.inspections, today, config);
        let risk = assess(&classified, &input.violations);
        let recommendations = recommend(&classified, &input.violations, &input.cost_records);

        let mut inspections: Vec<InspectionStatusView> = classified
            .iter()
            .map(InspectionStatusView::from_classified)
            .collect();
        inspections.sort_by(|a, b| a.next_due_date.cmp(&b.next_due_date));

        Self {
            today,
            due_soon_window_days: config.due_soon_window_days,
            inspections,
            risk,
            recommendations,
        }
    }
}
