use super::super::calendar::format_cost_range;
use super::super::classifier::ClassifiedInspection;
use super::super::display::{category_descriptor, urgency_color, DisplayDescriptor};
use super::super::domain::{CalculatedStatus, ComplianceCategory, Frequency, UrgencyLevel};
use chrono::NaiveDate;
use serde::Serialize;

/// Presentation-ready row for one obligation: the stored fields plus the
/// derived status and the labels every surface renders from.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionStatusView {
    pub id: String,
    pub property_id: String,
    pub inspection_type: String,
    pub category: ComplianceCategory,
    pub category_label: &'static str,
    pub category_display: DisplayDescriptor,
    pub authority: String,
    pub frequency: Frequency,
    pub frequency_label: &'static str,
    pub next_due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed_date: Option<NaiveDate>,
    pub days_until_due: i64,
    pub urgency: UrgencyLevel,
    pub urgency_label: &'static str,
    pub urgency_color: &'static str,
    pub calculated_status: CalculatedStatus,
    pub status_label: &'static str,
    pub estimated_cost: String,
    pub property_address: String,
}

impl InspectionStatusView {
    pub fn from_classified(classified: &ClassifiedInspection) -> Self {
        let record = &classified.record;
        let insight = &classified.insight;

        Self {
            id: record.id.clone(),
            property_id: record.property_id.clone(),
            inspection_type: record.inspection_type.clone(),
            category: record.category,
            category_label: record.category.label(),
            category_display: category_descriptor(record.category),
            authority: record.authority.clone(),
            frequency: record.frequency,
            frequency_label: record.frequency.label(),
            next_due_date: record.next_due_date,
            last_completed_date: record.last_completed_date,
            days_until_due: insight.days_until_due,
            urgency: insight.urgency,
            urgency_label: insight.urgency.label(),
            urgency_color: urgency_color(insight.urgency),
            calculated_status: insight.calculated_status,
            status_label: insight.calculated_status.label(),
            estimated_cost: format_cost_range(&record.estimated_cost),
            property_address: record.property_address.clone(),
        }
    }
}
