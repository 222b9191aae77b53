use super::domain::{ComplianceCategory, UrgencyLevel, ViolationSeverity};
use super::risk::RiskLevel;
use serde::Serialize;

/// Plain display hints for the presentation layer. The engine owns the
/// mapping so every surface renders a category or tier the same way; it
/// owns no rendering beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayDescriptor {
    pub icon: &'static str,
    pub color: &'static str,
}

pub const fn category_descriptor(category: ComplianceCategory) -> DisplayDescriptor {
    match category {
        ComplianceCategory::FireSafety => DisplayDescriptor {
            icon: "flame",
            color: "#dc2626",
        },
        ComplianceCategory::BuildingSystems => DisplayDescriptor {
            icon: "wrench",
            color: "#2563eb",
        },
        ComplianceCategory::Elevators => DisplayDescriptor {
            icon: "move-vertical",
            color: "#7c3aed",
        },
        ComplianceCategory::Environmental => DisplayDescriptor {
            icon: "droplets",
            color: "#059669",
        },
        ComplianceCategory::HealthSafety => DisplayDescriptor {
            icon: "heart-pulse",
            color: "#d97706",
        },
        ComplianceCategory::General => DisplayDescriptor {
            icon: "clipboard-list",
            color: "#64748b",
        },
    }
}

pub const fn urgency_color(urgency: UrgencyLevel) -> &'static str {
    match urgency {
        UrgencyLevel::Critical => "#dc2626",
        UrgencyLevel::High => "#ea580c",
        UrgencyLevel::Medium => "#ca8a04",
        UrgencyLevel::Low => "#16a34a",
    }
}

pub const fn severity_color(severity: ViolationSeverity) -> &'static str {
    match severity {
        ViolationSeverity::Critical => "#dc2626",
        ViolationSeverity::High => "#ea580c",
        ViolationSeverity::Medium => "#ca8a04",
        ViolationSeverity::Low => "#16a34a",
    }
}

pub const fn risk_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "#dc2626",
        RiskLevel::High => "#ea580c",
        RiskLevel::Medium => "#ca8a04",
        RiskLevel::Low => "#16a34a",
    }
}
