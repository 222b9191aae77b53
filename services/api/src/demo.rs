use crate::infra::parse_date;
use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use clap::Args;
use propcheck::compliance::calendar::calendar_export;
use propcheck::compliance::catalog::{seed_inspection, SystemCatalog};
use propcheck::compliance::classifier::{classify_all, ClassifierConfig};
use propcheck::compliance::domain::{
    CostRecord, InspectionRecord, RawStatus, Violation, ViolationSeverity, ViolationStatus,
};
use propcheck::compliance::trend::{trend, PeriodCounts, TrendSnapshot};
use propcheck::compliance::{EngineInput, PortfolioOverview};
use propcheck::error::AppError;
use propcheck::ingest::ComplianceExportImporter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PortfolioReportArgs {
    /// Inspection export from the data store (CSV)
    #[arg(long)]
    pub(crate) inspections_csv: PathBuf,
    /// Optional violation export (CSV)
    #[arg(long)]
    pub(crate) violations_csv: Option<PathBuf>,
    /// Optional completed-cost export (CSV)
    #[arg(long)]
    pub(crate) costs_csv: Option<PathBuf>,
    /// Evaluation date for the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Due-soon look-ahead window in days (defaults to 7)
    #[arg(long)]
    pub(crate) due_soon_window_days: Option<i64>,
}

#[derive(Args, Debug)]
pub(crate) struct CalendarExportArgs {
    /// Inspection export from the data store (CSV)
    #[arg(long)]
    pub(crate) inspections_csv: PathBuf,
    /// Evaluation date used to classify each event (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the feed to a file instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Due-soon look-ahead window in days (defaults to 7)
    #[arg(long)]
    pub(crate) due_soon_window_days: Option<i64>,
    /// Include the iCalendar feed in the demo output.
    #[arg(long)]
    pub(crate) include_calendar: bool,
}

pub(crate) fn run_portfolio_report(args: PortfolioReportArgs) -> Result<(), AppError> {
    let PortfolioReportArgs {
        inspections_csv,
        violations_csv,
        costs_csv,
        today,
        due_soon_window_days,
    } = args;

    let inspections = ComplianceExportImporter::inspections_from_path(inspections_csv)?;
    let violations = match violations_csv {
        Some(path) => ComplianceExportImporter::violations_from_path(path)?,
        None => Vec::new(),
    };
    let cost_records = match costs_csv {
        Some(path) => ComplianceExportImporter::cost_records_from_path(path)?,
        None => Vec::new(),
    };

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = due_soon_window_days
        .map(ClassifierConfig::with_window)
        .unwrap_or_default();

    let input = EngineInput {
        inspections,
        violations,
        cost_records,
    };
    let overview = PortfolioOverview::build(&input, today, &config);
    let snapshot = month_over_month_trend(&input, today);

    render_overview(&overview);
    render_trend(&snapshot);

    Ok(())
}

pub(crate) fn run_calendar_export(args: CalendarExportArgs) -> Result<(), AppError> {
    let CalendarExportArgs {
        inspections_csv,
        today,
        output,
    } = args;

    let inspections = ComplianceExportImporter::inspections_from_path(inspections_csv)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let classified = classify_all(&inspections, today, &ClassifierConfig::default());
    let feed = calendar_export(&classified);

    match output {
        Some(path) => std::fs::write(path, feed)?,
        None => print!("{feed}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        due_soon_window_days,
        include_calendar,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = due_soon_window_days
        .map(ClassifierConfig::with_window)
        .unwrap_or_default();

    println!("Property compliance demo");
    println!(
        "Evaluated {} with a {}-day due-soon window",
        today, config.due_soon_window_days
    );

    let input = synthetic_portfolio(today);
    let overview = PortfolioOverview::build(&input, today, &config);
    let snapshot = month_over_month_trend(&input, today);

    render_overview(&overview);
    render_trend(&snapshot);

    if include_calendar {
        let classified = classify_all(&input.inspections, today, &config);
        println!("\niCalendar feed");
        print!("{}", calendar_export(&classified));
    }

    Ok(())
}

pub(crate) fn render_overview(overview: &PortfolioOverview) {
    println!("\nInspections by due date");
    if overview.inspections.is_empty() {
        println!("- none on file");
    }
    for inspection in &overview.inspections {
        println!(
            "- {} | {} | due {} ({} day{}) | {} | urgency {} | {}",
            inspection.id,
            inspection.inspection_type,
            inspection.next_due_date,
            inspection.days_until_due,
            if inspection.days_until_due == 1 { "" } else { "s" },
            inspection.status_label,
            inspection.urgency_label,
            inspection.estimated_cost
        );
    }

    println!(
        "\nRisk score: {}/100 ({})",
        overview.risk.score,
        overview.risk.level.label()
    );
    println!(
        "- {} overdue | {} critical open violation(s) | {} due soon",
        overview.risk.breakdown.overdue_inspections,
        overview.risk.breakdown.critical_open_violations,
        overview.risk.breakdown.due_soon_inspections
    );

    if overview.recommendations.is_empty() {
        println!("\nRecommendations: none");
    } else {
        println!("\nRecommendations");
        for recommendation in &overview.recommendations {
            println!(
                "- [{} | {}] {}: {} -> {}",
                recommendation.kind.label(),
                recommendation.priority.label(),
                recommendation.title,
                recommendation.description,
                recommendation.action
            );
        }
    }
}

fn render_trend(snapshot: &TrendSnapshot) {
    println!("\nMonth-over-month trend");
    println!(
        "- inspections {:+.1}% | violations {:+.1}% | compliance {:+.1}%",
        snapshot.inspection_delta_pct,
        snapshot.violation_delta_pct,
        snapshot.compliance_delta_pct
    );
}

/// Period selection is a caller concern: the CLI compares the calendar
/// month containing `today` against the month before it.
fn month_over_month_trend(input: &EngineInput, today: NaiveDate) -> TrendSnapshot {
    let current_start = start_of_month(today);
    let next_start = current_start + Months::new(1);
    let prior_start = current_start - Months::new(1);

    let current = window_counts(input, current_start, next_start);
    let prior = window_counts(input, prior_start, current_start);

    trend(&current, &prior)
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn window_counts(input: &EngineInput, start: NaiveDate, end: NaiveDate) -> PeriodCounts {
    PeriodCounts {
        inspections: input
            .inspections
            .iter()
            .filter(|record| record.next_due_date >= start && record.next_due_date < end)
            .count(),
        violations: input
            .violations
            .iter()
            .filter(|violation| violation.issued_date >= start && violation.issued_date < end)
            .count(),
    }
}

fn synthetic_portfolio(today: NaiveDate) -> EngineInput {
    let catalog = SystemCatalog::standard();
    let property_id = "PROP-DEMO";
    let address = "120 Broadway, New York";

    let mut inspections: Vec<InspectionRecord> = Vec::new();
    for key in ["fire_alarm", "sprinkler_flow", "boiler_lowpressure"] {
        if let Some(definition) = catalog.find(key) {
            inspections.push(seed_inspection(definition, property_id, address, today));
        }
    }

    // Age a couple of seeded obligations so every urgency tier shows up.
    if let Some(first) = inspections.get_mut(0) {
        first.next_due_date = today - Duration::days(12);
    }
    if let Some(second) = inspections.get_mut(1) {
        second.next_due_date = today + Duration::days(3);
    }
    if let Some(third) = inspections.get_mut(2) {
        third.next_due_date = today + Duration::days(20);
        third.raw_status = RawStatus::InProgress;
    }

    let violations = vec![
        Violation {
            id: "V-100".to_string(),
            property_id: property_id.to_string(),
            category: "Sprinkler impairment".to_string(),
            severity: ViolationSeverity::Critical,
            issued_date: today - Duration::days(9),
            status: ViolationStatus::Open,
            resolved_date: None,
        },
        Violation {
            id: "V-101".to_string(),
            property_id: property_id.to_string(),
            category: "Facade".to_string(),
            severity: ViolationSeverity::from_risk_category("STRUCTURAL"),
            issued_date: today - Duration::days(40),
            status: ViolationStatus::Closed,
            resolved_date: Some(today - Duration::days(20)),
        },
    ];

    let cost_records = vec![
        CostRecord {
            inspection_id: "INS-2024-11".to_string(),
            actual_cost_cents: 42_000,
        },
        CostRecord {
            inspection_id: "INS-2024-12".to_string(),
            actual_cost_cents: 39_000,
        },
        CostRecord {
            inspection_id: "INS-2025-01".to_string(),
            actual_cost_cents: 145_000,
        },
    ];

    EngineInput {
        inspections,
        violations,
        cost_records,
    }
}
