use chrono::{Duration, NaiveDate};
use propcheck::compliance::catalog::{seed_inspection, SystemCatalog};
use propcheck::compliance::classifier::ClassifierConfig;
use propcheck::compliance::domain::{
    CalculatedStatus, ComplianceCategory, CostRange, Frequency, InspectionRecord, RawStatus,
    UrgencyLevel, Violation, ViolationSeverity, ViolationStatus,
};
use propcheck::compliance::risk::RiskLevel;
use propcheck::compliance::{EngineInput, PortfolioOverview};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn inspection(id: &str, next_due: NaiveDate) -> InspectionRecord {
    InspectionRecord {
        id: id.to_string(),
        property_id: "PROP-1".to_string(),
        inspection_type: "Boiler Inspection".to_string(),
        category: ComplianceCategory::BuildingSystems,
        authority: "Department of Buildings".to_string(),
        frequency: Frequency::Annual,
        next_due_date: next_due,
        last_completed_date: None,
        raw_status: RawStatus::Scheduled,
        estimated_cost: CostRange {
            min_cents: 25_000,
            max_cents: 60_000,
        },
        property_address: "55 Water St".to_string(),
    }
}

#[test]
fn overview_assembles_enrichment_risk_and_recommendations() {
    let today = day(2025, 6, 15);
    let input = EngineInput {
        inspections: vec![
            inspection("INS-2", today + Duration::days(20)),
            inspection("INS-1", today - Duration::days(5)),
        ],
        violations: vec![Violation {
            id: "V-1".to_string(),
            property_id: "PROP-1".to_string(),
            category: "Fire".to_string(),
            severity: ViolationSeverity::Critical,
            issued_date: day(2025, 5, 20),
            status: ViolationStatus::Open,
            resolved_date: None,
        }],
        cost_records: Vec::new(),
    };

    let overview = PortfolioOverview::build(&input, today, &ClassifierConfig::default());

    assert_eq!(overview.today, today);
    assert_eq!(overview.due_soon_window_days, 7);

    // Rows come back sorted by due date with labels populated.
    assert_eq!(overview.inspections.len(), 2);
    assert_eq!(overview.inspections[0].id, "INS-1");
    assert_eq!(overview.inspections[0].status_label, "Overdue");
    assert_eq!(overview.inspections[0].urgency, UrgencyLevel::Critical);
    assert_eq!(overview.inspections[0].estimated_cost, "$250 - $600");
    assert_eq!(overview.inspections[1].days_until_due, 20);
    assert_eq!(overview.inspections[1].category_label, "Building Systems");

    // 1*25 + 1*30 = 55.
    assert_eq!(overview.risk.score, 55);
    assert_eq!(overview.risk.level, RiskLevel::High);

    let titles: Vec<&str> = overview
        .recommendations
        .iter()
        .map(|recommendation| recommendation.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Address Overdue Inspections", "Resolve Critical Violations"]
    );
}

#[test]
fn empty_snapshot_degrades_to_safe_zero_results() {
    let overview = PortfolioOverview::build(
        &EngineInput::default(),
        day(2025, 6, 15),
        &ClassifierConfig::default(),
    );

    assert!(overview.inspections.is_empty());
    assert_eq!(overview.risk.score, 0);
    assert_eq!(overview.risk.level, RiskLevel::Low);
    assert!(overview.recommendations.is_empty());
}

#[test]
fn unchanged_snapshots_compare_equal_for_recompute_skipping() {
    let today = day(2025, 6, 15);
    let input = EngineInput {
        inspections: vec![inspection("INS-1", today + Duration::days(10))],
        violations: Vec::new(),
        cost_records: Vec::new(),
    };

    assert_eq!(input, input.clone());

    let mut changed = input.clone();
    changed.inspections[0].raw_status = RawStatus::InProgress;
    assert_ne!(input, changed);
}

#[test]
fn catalog_seeding_composes_with_the_overview() {
    let today = day(2025, 6, 15);
    let catalog = SystemCatalog::standard();
    let definition = catalog.find("emergency_lighting").expect("catalog entry");

    let seeded = seed_inspection(definition, "PROP-7", "1 Main St, Des Moines", today);
    assert_eq!(seeded.id, "PROP-7-emergency_lighting");
    assert_eq!(seeded.frequency, Frequency::Monthly);
    assert_eq!(seeded.next_due_date, day(2025, 7, 15));
    assert_eq!(seeded.last_completed_date, None);

    let overview = PortfolioOverview::build(
        &EngineInput {
            inspections: vec![seeded],
            violations: Vec::new(),
            cost_records: Vec::new(),
        },
        today,
        &ClassifierConfig::default(),
    );
    assert_eq!(
        overview.inspections[0].calculated_status,
        CalculatedStatus::Scheduled
    );
    assert_eq!(overview.inspections[0].urgency, UrgencyLevel::Medium);
    assert_eq!(overview.inspections[0].days_until_due, 30);
}
