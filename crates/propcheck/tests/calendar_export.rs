use chrono::NaiveDate;
use propcheck::compliance::calendar::{calendar_export, format_cost_range};
use propcheck::compliance::classifier::{classify_all, ClassifierConfig};
use propcheck::compliance::domain::{
    ComplianceCategory, CostRange, Frequency, InspectionRecord, RawStatus,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn sample_inspection() -> InspectionRecord {
    InspectionRecord {
        id: "INS-1".to_string(),
        property_id: "PROP-1".to_string(),
        inspection_type: "Fire Alarm System Inspection".to_string(),
        category: ComplianceCategory::FireSafety,
        authority: "Fire Department".to_string(),
        frequency: Frequency::Annual,
        next_due_date: day(2025, 9, 1),
        last_completed_date: None,
        raw_status: RawStatus::Scheduled,
        estimated_cost: CostRange {
            min_cents: 30_000,
            max_cents: 50_000,
        },
        property_address: "120 Broadway, New York".to_string(),
    }
}

#[test]
fn export_emits_one_event_block_per_inspection() {
    let today = day(2025, 8, 20);
    let classified = classify_all(&[sample_inspection()], today, &ClassifierConfig::default());

    let feed = calendar_export(&classified);

    assert!(feed.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(feed.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(feed.matches("BEGIN:VEVENT").count(), 1);
    assert!(feed.contains("UID:INS-1@propcheck\r\n"));
    assert!(feed.contains("DTSTART;VALUE=DATE:20250901\r\n"));
    assert!(feed.contains("DTEND;VALUE=DATE:20250902\r\n"));
    assert!(feed.contains("SUMMARY:Fire Alarm System Inspection\r\n"));
    assert!(feed.contains("LOCATION:120 Broadway\\, New York\r\n"));
}

#[test]
fn event_description_renders_status_and_dollar_cost_range() {
    let today = day(2025, 8, 20);
    let classified = classify_all(&[sample_inspection()], today, &ClassifierConfig::default());

    let feed = calendar_export(&classified);
    assert!(feed.contains("DESCRIPTION:120 Broadway\\, New York | Scheduled | $300 - $500\r\n"));
}

#[test]
fn cost_range_drops_minor_units_in_display() {
    assert_eq!(
        format_cost_range(&CostRange {
            min_cents: 30_000,
            max_cents: 50_000,
        }),
        "$300 - $500"
    );
    assert_eq!(
        format_cost_range(&CostRange {
            min_cents: 0,
            max_cents: 1_500_00,
        }),
        "$0 - $1500"
    );
}

#[test]
fn empty_portfolio_exports_an_empty_calendar() {
    let feed = calendar_export(&[]);
    assert_eq!(feed, "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Propcheck//Compliance Schedule//EN\r\nEND:VCALENDAR\r\n");
}
