use super::classifier::ClassifiedInspection;
use super::domain::CostRange;
use chrono::Duration;

/// Renders minor-currency-unit bounds as whole-dollar display text, e.g.
/// `$300 - $500`.
pub fn format_cost_range(range: &CostRange) -> String {
    format!("${} - ${}", range.min_cents / 100, range.max_cents / 100)
}

/// Formats classified inspections as an iCalendar feed: one all-day event
/// per obligation on its due date. Pure string assembly over already
/// enriched records.
pub fn calendar_export(inspections: &[ClassifiedInspection]) -> String {
    let mut lines: Vec<String> = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//Propcheck//Compliance Schedule//EN".to_string(),
    ];

    for inspection in inspections {
        let record = &inspection.record;
        let start = record.next_due_date;
        let end = start + Duration::days(1);

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!("UID:{}@propcheck", record.id));
        lines.push(format!("DTSTART;VALUE=DATE:{}", start.format("%Y%m%d")));
        lines.push(format!("DTEND;VALUE=DATE:{}", end.format("%Y%m%d")));
        lines.push(format!("SUMMARY:{}", escape_text(&record.inspection_type)));
        lines.push(format!(
            "DESCRIPTION:{} | {} | {}",
            escape_text(&record.property_address),
            inspection.status().label(),
            format_cost_range(&record.estimated_cost)
        ));
        lines.push(format!("LOCATION:{}", escape_text(&record.property_address)));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());
    let mut body = lines.join("\r\n");
    body.push_str("\r\n");
    body
}

/// Minimal RFC 5545 text escaping for the fields we interpolate.
fn escape_text(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace('\n', "\\n")
}
