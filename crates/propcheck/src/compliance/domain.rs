use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often a compliance system must be re-inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Monthly,
    Quarterly,
    Biannual,
    Annual,
}

impl Frequency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Biannual => "Biannual",
            Self::Annual => "Annual",
        }
    }

    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Biannual => 6,
            Self::Annual => 12,
        }
    }

    /// Total parse over uncontrolled upstream text: unknown frequencies
    /// fall back to Annual rather than failing.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "biannual" | "biannually" | "semiannual" | "semi-annual" => Self::Biannual,
            _ => Self::Annual,
        }
    }
}

/// Source-system lifecycle status as recorded upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl RawStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Terminal statuses take precedence over date-derived status.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::InProgress | Self::Completed | Self::Cancelled)
    }

    /// Lenient parse over free-text source statuses; unknown text reads
    /// as Scheduled.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "in progress" | "in_progress" | "in-progress" => Self::InProgress,
            "completed" | "complete" | "done" => Self::Completed,
            "cancelled" | "canceled" => Self::Cancelled,
            _ => Self::Scheduled,
        }
    }
}

/// Date-derived urgency tier driving visual and sort priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Displayed lifecycle label combining date-derived urgency with terminal
/// raw states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatedStatus {
    Overdue,
    DueSoon,
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl CalculatedStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Overdue",
            Self::DueSoon => "Due Soon",
            Self::Scheduled => "Scheduled",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    FireSafety,
    BuildingSystems,
    Elevators,
    Environmental,
    HealthSafety,
    General,
}

impl ComplianceCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::FireSafety,
            Self::BuildingSystems,
            Self::Elevators,
            Self::Environmental,
            Self::HealthSafety,
            Self::General,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FireSafety => "Fire Safety",
            Self::BuildingSystems => "Building Systems",
            Self::Elevators => "Elevators",
            Self::Environmental => "Environmental",
            Self::HealthSafety => "Health & Safety",
            Self::General => "General Compliance",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "fire safety" | "fire_safety" | "fire" => Self::FireSafety,
            "building systems" | "building_systems" => Self::BuildingSystems,
            "elevators" | "elevator" => Self::Elevators,
            "environmental" => Self::Environmental,
            "health & safety" | "health and safety" | "health_safety" => Self::HealthSafety,
            _ => Self::General,
        }
    }
}

/// Ordinal severity tier for violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl ViolationSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Normalizes jurisdiction-specific risk categories that arrive in
    /// place of a severity. Unmapped categories read as Medium.
    pub fn from_risk_category(category: &str) -> Self {
        match category.trim().to_ascii_uppercase().as_str() {
            "FIRE" => Self::Critical,
            "STRUCTURAL" | "ELECTRICAL" => Self::High,
            "MECHANICAL" | "PLUMBING" => Self::Medium,
            "HOUSING" | "ZONING" => Self::Low,
            _ => Self::Medium,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStatus {
    Open,
    Closed,
}

impl ViolationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
        }
    }
}

/// Estimated cost band in minor currency units (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    pub min_cents: i64,
    pub max_cents: i64,
}

/// One compliance obligation instance for a property, as fetched from the
/// data store. Derived status fields live on [`super::classifier::StatusInsight`],
/// never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRecord {
    pub id: String,
    pub property_id: String,
    pub inspection_type: String,
    pub category: ComplianceCategory,
    pub authority: String,
    pub frequency: Frequency,
    pub next_due_date: NaiveDate,
    pub last_completed_date: Option<NaiveDate>,
    pub raw_status: RawStatus,
    pub estimated_cost: CostRange,
    pub property_address: String,
}

/// An open or closed finding against a property. Severity is always one of
/// the four ordinal tiers by the time a record exists; jurisdiction risk
/// categories are normalized at the ingest boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    pub property_id: String,
    pub category: String,
    pub severity: ViolationSeverity,
    pub issued_date: NaiveDate,
    pub status: ViolationStatus,
    pub resolved_date: Option<NaiveDate>,
}

/// Recorded cost of a completed inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub inspection_id: String,
    pub actual_cost_cents: i64,
}
