use super::domain::{Frequency, InspectionRecord, RawStatus};
use chrono::{Months, NaiveDate};

/// Computes the next due date for a recurring obligation. Calendar-month
/// arithmetic clamps day-of-month to the shorter target month, so
/// Jan 31 + Monthly lands on the last day of February.
pub fn next_due_date(frequency: Frequency, baseline: NaiveDate) -> NaiveDate {
    baseline
        .checked_add_months(Months::new(frequency.months()))
        .unwrap_or(NaiveDate::MAX)
}

/// Records a completion: the returned record carries the completion date
/// and a due date rolled forward one cycle from it. The prior record is
/// superseded, never deleted.
pub fn roll_forward(record: &InspectionRecord, completed_on: NaiveDate) -> InspectionRecord {
    InspectionRecord {
        next_due_date: next_due_date(record.frequency, completed_on),
        last_completed_date: Some(completed_on),
        raw_status: RawStatus::Scheduled,
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn month_end_clamps_to_shorter_month() {
        assert_eq!(
            next_due_date(Frequency::Monthly, day(2025, 1, 31)),
            day(2025, 2, 28)
        );
        assert_eq!(
            next_due_date(Frequency::Monthly, day(2028, 1, 31)),
            day(2028, 2, 29)
        );
    }

    #[test]
    fn frequencies_advance_by_calendar_months() {
        let baseline = day(2025, 3, 15);
        assert_eq!(next_due_date(Frequency::Quarterly, baseline), day(2025, 6, 15));
        assert_eq!(next_due_date(Frequency::Biannual, baseline), day(2025, 9, 15));
        assert_eq!(next_due_date(Frequency::Annual, baseline), day(2026, 3, 15));
    }
}
