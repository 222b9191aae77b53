use super::domain::{CalculatedStatus, InspectionRecord, RawStatus, UrgencyLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Documented default for the due-soon window. Call sites may override it
/// per request; deployments via `APP_DUE_SOON_WINDOW_DAYS`.
pub const DEFAULT_DUE_SOON_WINDOW_DAYS: i64 = 7;

/// Items due further out than this read as low urgency.
pub const SCHEDULED_HORIZON_DAYS: i64 = 30;

/// Tuning for the status classifier. The due-soon window is explicit
/// configuration because different dashboard surfaces want different
/// look-ahead windows for the same tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub due_soon_window_days: i64,
}

impl ClassifierConfig {
    pub const fn with_window(due_soon_window_days: i64) -> Self {
        Self {
            due_soon_window_days,
        }
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            due_soon_window_days: DEFAULT_DUE_SOON_WINDOW_DAYS,
        }
    }
}

/// Date-derived enrichment for a single inspection record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusInsight {
    pub days_until_due: i64,
    pub urgency: UrgencyLevel,
    pub calculated_status: CalculatedStatus,
}

/// An inspection record together with its computed status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedInspection {
    pub record: InspectionRecord,
    pub insight: StatusInsight,
}

impl ClassifiedInspection {
    pub fn status(&self) -> CalculatedStatus {
        self.insight.calculated_status
    }

    pub fn urgency(&self) -> UrgencyLevel {
        self.insight.urgency
    }
}

/// Classifies one obligation. Urgency is always date-driven; the
/// calculated status follows the date thresholds unless the raw source
/// status is terminal, in which case the raw status wins.
pub fn classify(
    next_due_date: NaiveDate,
    today: NaiveDate,
    raw_status: RawStatus,
    config: &ClassifierConfig,
) -> StatusInsight {
    let days_until_due = (next_due_date - today).num_days();

    let (urgency, date_status) = if days_until_due < 0 {
        (UrgencyLevel::Critical, CalculatedStatus::Overdue)
    } else if days_until_due <= config.due_soon_window_days {
        (UrgencyLevel::High, CalculatedStatus::DueSoon)
    } else if days_until_due <= SCHEDULED_HORIZON_DAYS {
        (UrgencyLevel::Medium, CalculatedStatus::Scheduled)
    } else {
        (UrgencyLevel::Low, CalculatedStatus::Scheduled)
    };

    let calculated_status = if raw_status.is_terminal() {
        match raw_status {
            RawStatus::InProgress => CalculatedStatus::InProgress,
            RawStatus::Completed => CalculatedStatus::Completed,
            RawStatus::Cancelled => CalculatedStatus::Cancelled,
            RawStatus::Scheduled => date_status,
        }
    } else {
        date_status
    };

    StatusInsight {
        days_until_due,
        urgency,
        calculated_status,
    }
}

pub fn classify_record(
    record: &InspectionRecord,
    today: NaiveDate,
    config: &ClassifierConfig,
) -> ClassifiedInspection {
    let insight = classify(record.next_due_date, today, record.raw_status, config);
    ClassifiedInspection {
        record: record.clone(),
        insight,
    }
}

pub fn classify_all(
    records: &[InspectionRecord],
    today: NaiveDate,
    config: &ClassifierConfig,
) -> Vec<ClassifiedInspection> {
    records
        .iter()
        .map(|record| classify_record(record, today, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn terminal_raw_status_overrides_date_status_but_not_urgency() {
        let today = day(2025, 6, 1);
        let overdue = day(2025, 5, 20);

        let insight = classify(
            overdue,
            today,
            RawStatus::Completed,
            &ClassifierConfig::default(),
        );
        assert_eq!(insight.calculated_status, CalculatedStatus::Completed);
        assert_eq!(insight.urgency, UrgencyLevel::Critical);
        assert_eq!(insight.days_until_due, -12);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let today = day(2025, 6, 1);
        let config = ClassifierConfig::default();

        let at_window = classify(day(2025, 6, 8), today, RawStatus::Scheduled, &config);
        assert_eq!(at_window.calculated_status, CalculatedStatus::DueSoon);
        assert_eq!(at_window.urgency, UrgencyLevel::High);

        let past_window = classify(day(2025, 6, 9), today, RawStatus::Scheduled, &config);
        assert_eq!(past_window.calculated_status, CalculatedStatus::Scheduled);
        assert_eq!(past_window.urgency, UrgencyLevel::Medium);
    }
}
