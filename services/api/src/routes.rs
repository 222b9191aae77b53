use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;
use std::io::Cursor;
use propcheck::compliance::calendar::calendar_export;
use propcheck::compliance::classifier::{classify_all, ClassifierConfig};
use propcheck::compliance::domain::{CostRecord, InspectionRecord, Violation};
use propcheck::compliance::trend::{trend, PeriodCounts, TrendSnapshot};
use propcheck::compliance::{EngineInput, PortfolioOverview};
use propcheck::error::AppError;
use propcheck::ingest::ComplianceExportImporter;

#[derive(Debug, Deserialize)]
pub(crate) struct OverviewRequest {
    #[serde(default)]
    pub(crate) inspections: Vec<InspectionRecord>,
    #[serde(default)]
    pub(crate) violations: Vec<Violation>,
    #[serde(default)]
    pub(crate) cost_records: Vec<CostRecord>,
    /// Raw data-store CSV exports, appended to the inline records after
    /// boundary validation.
    #[serde(default)]
    pub(crate) inspections_csv: Option<String>,
    #[serde(default)]
    pub(crate) violations_csv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) due_soon_window_days: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PeriodRecordSet {
    #[serde(default)]
    pub(crate) inspections: Vec<InspectionRecord>,
    #[serde(default)]
    pub(crate) violations: Vec<Violation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendRequest {
    pub(crate) current: PeriodRecordSet,
    pub(crate) prior: PeriodRecordSet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalendarRequest {
    #[serde(default)]
    pub(crate) inspections: Vec<InspectionRecord>,
    #[serde(default)]
    pub(crate) inspections_csv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) due_soon_window_days: Option<i64>,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/compliance/overview",
            axum::routing::post(overview_endpoint),
        )
        .route(
            "/api/v1/compliance/trend",
            axum::routing::post(trend_endpoint),
        )
        .route(
            "/api/v1/compliance/calendar",
            axum::routing::post(calendar_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn overview_endpoint(
    Json(payload): Json<OverviewRequest>,
) -> Result<Json<PortfolioOverview>, AppError> {
    let OverviewRequest {
        mut inspections,
        mut violations,
        cost_records,
        inspections_csv,
        violations_csv,
        today,
        due_soon_window_days,
    } = payload;

    if let Some(csv) = inspections_csv {
        let reader = Cursor::new(csv.into_bytes());
        inspections.extend(ComplianceExportImporter::inspections_from_reader(reader)?);
    }
    if let Some(csv) = violations_csv {
        let reader = Cursor::new(csv.into_bytes());
        violations.extend(ComplianceExportImporter::violations_from_reader(reader)?);
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = due_soon_window_days
        .map(ClassifierConfig::with_window)
        .unwrap_or_default();

    let input = EngineInput {
        inspections,
        violations,
        cost_records,
    };

    Ok(Json(PortfolioOverview::build(&input, today, &config)))
}

pub(crate) async fn trend_endpoint(Json(payload): Json<TrendRequest>) -> Json<TrendSnapshot> {
    let current = PeriodCounts::from_records(&payload.current.inspections, &payload.current.violations);
    let prior = PeriodCounts::from_records(&payload.prior.inspections, &payload.prior.violations);

    Json(trend(&current, &prior))
}

pub(crate) async fn calendar_endpoint(
    Json(payload): Json<CalendarRequest>,
) -> Result<impl IntoResponse, AppError> {
    let CalendarRequest {
        mut inspections,
        inspections_csv,
        today,
        due_soon_window_days,
    } = payload;

    if let Some(csv) = inspections_csv {
        let reader = Cursor::new(csv.into_bytes());
        inspections.extend(ComplianceExportImporter::inspections_from_reader(reader)?);
    }

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = due_soon_window_days
        .map(ClassifierConfig::with_window)
        .unwrap_or_default();

    let classified = classify_all(&inspections, today, &config);
    let feed = calendar_export(&classified);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/calendar; charset=utf-8")],
        feed,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use propcheck::compliance::domain::{
        ComplianceCategory, CostRange, Frequency, RawStatus,
    };
    use propcheck::compliance::risk::RiskLevel;

    fn sample_inspection(id: &str, next_due: NaiveDate) -> InspectionRecord {
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

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[tokio::test]
    async fn overview_endpoint_classifies_and_scores() {
        let today = day(2025, 6, 15);
        let request = OverviewRequest {
            inspections: vec![sample_inspection("INS-1", day(2025, 6, 10))],
            violations: Vec::new(),
            cost_records: Vec::new(),
            inspections_csv: None,
            violations_csv: None,
            today: Some(today),
            due_soon_window_days: None,
        };

        let Json(body) = overview_endpoint(Json(request)).await.expect("overview builds");
        assert_eq!(body.inspections.len(), 1);
        assert_eq!(body.inspections[0].status_label, "Overdue");
        assert_eq!(body.risk.score, 25);
        assert_eq!(body.risk.level, RiskLevel::Medium);
        assert_eq!(body.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn overview_endpoint_accepts_csv_exports() {
        let csv = "Inspection ID,Property ID,Inspection Type,Category,Authority,Frequency,Next Due Date,Last Completed Date,Status,Estimated Cost Min,Estimated Cost Max,Property Address\n\
                   INS-9,PROP-2,Fire Alarm System Inspection,Fire Safety,FDNY,Annual,2025-07-01,,Scheduled,30000,80000,120 Broadway\n";
        let request = OverviewRequest {
            inspections: Vec::new(),
            violations: Vec::new(),
            cost_records: Vec::new(),
            inspections_csv: Some(csv.to_string()),
            violations_csv: None,
            today: Some(day(2025, 6, 15)),
            due_soon_window_days: Some(30),
        };

        let Json(body) = overview_endpoint(Json(request)).await.expect("csv parses");
        assert_eq!(body.due_soon_window_days, 30);
        assert_eq!(body.inspections.len(), 1);
        assert_eq!(body.inspections[0].status_label, "Due Soon");
    }

    #[tokio::test]
    async fn overview_endpoint_rejects_malformed_csv() {
        let csv = "Inspection ID,Property ID,Inspection Type,Category,Authority,Frequency,Next Due Date,Last Completed Date,Status,Estimated Cost Min,Estimated Cost Max,Property Address\n\
                   INS-9,PROP-2,Fire Alarm,Fire Safety,FDNY,Annual,07/01/2025,,Scheduled,0,0,120 Broadway\n";
        let request = OverviewRequest {
            inspections: Vec::new(),
            violations: Vec::new(),
            cost_records: Vec::new(),
            inspections_csv: Some(csv.to_string()),
            violations_csv: None,
            today: Some(day(2025, 6, 15)),
            due_soon_window_days: None,
        };

        let err = overview_endpoint(Json(request))
            .await
            .expect_err("invalid date rejected");
        assert!(matches!(err, AppError::Ingest(_)));
    }

    #[tokio::test]
    async fn trend_endpoint_guards_zero_denominators() {
        let request = TrendRequest {
            current: PeriodRecordSet {
                inspections: vec![sample_inspection("INS-1", day(2025, 6, 20))],
                violations: Vec::new(),
            },
            prior: PeriodRecordSet {
                inspections: Vec::new(),
                violations: Vec::new(),
            },
        };

        let Json(snapshot) = trend_endpoint(Json(request)).await;
        assert_eq!(snapshot.inspection_delta_pct, 0.0);
        assert_eq!(snapshot.compliance_delta_pct, 0.0);
    }
}
