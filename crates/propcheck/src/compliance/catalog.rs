use super::domain::{
    ComplianceCategory, CostRange, Frequency, InspectionRecord, RawStatus,
};
use super::schedule::next_due_date;
use chrono::NaiveDate;

/// Immutable catalog entry describing a recurring regulatory obligation.
#[derive(Debug, Clone)]
pub struct ComplianceSystemDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub category: ComplianceCategory,
    pub frequency: Frequency,
    pub authority: &'static str,
    pub jurisdictions: &'static [&'static str],
    pub estimated_cost: CostRange,
    pub requirements: Vec<&'static str>,
}

#[derive(Debug)]
pub struct SystemCatalog {
    systems: Vec<ComplianceSystemDefinition>,
}

impl SystemCatalog {
    pub fn standard() -> Self {
        Self {
            systems: standard_system_definitions(),
        }
    }

    pub fn find(&self, key: &str) -> Option<&ComplianceSystemDefinition> {
        self.systems.iter().find(|system| system.key == key)
    }

    pub fn systems_in_category(
        &self,
        category: ComplianceCategory,
    ) -> Vec<&ComplianceSystemDefinition> {
        self.systems
            .iter()
            .filter(|system| system.category == category)
            .collect()
    }

    pub fn systems_for_jurisdiction(&self, tag: &str) -> Vec<&ComplianceSystemDefinition> {
        self.systems
            .iter()
            .filter(|system| system.jurisdictions.iter().any(|candidate| *candidate == tag))
            .collect()
    }

    pub fn definitions(&self) -> &[ComplianceSystemDefinition] {
        &self.systems
    }
}

/// Attaching a catalog system to a property seeds its first obligation:
/// the scheduler produces the initial due date one cycle out from today.
pub fn seed_inspection(
    definition: &ComplianceSystemDefinition,
    property_id: &str,
    property_address: &str,
    today: NaiveDate,
) -> InspectionRecord {
    InspectionRecord {
        id: format!("{}-{}", property_id, definition.key),
        property_id: property_id.to_string(),
        inspection_type: definition.name.to_string(),
        category: definition.category,
        authority: definition.authority.to_string(),
        frequency: definition.frequency,
        next_due_date: next_due_date(definition.frequency, today),
        last_completed_date: None,
        raw_status: RawStatus::Scheduled,
        estimated_cost: definition.estimated_cost,
        property_address: property_address.to_string(),
    }
}

fn standard_system_definitions() -> Vec<ComplianceSystemDefinition> {
    vec![
        ComplianceSystemDefinition {
            key: "fire_alarm",
            name: "Fire Alarm System Inspection",
            category: ComplianceCategory::FireSafety,
            frequency: Frequency::Annual,
            authority: "Fire Department",
            jurisdictions: &["nyc", "new_york_state", "new_jersey"],
            estimated_cost: CostRange {
                min_cents: 30_000,
                max_cents: 80_000,
            },
            requirements: vec![
                "Test every initiating and notification device on the panel schedule.",
                "Confirm central-station signal transmission and record confirmation numbers.",
                "File the inspection report with the authority having jurisdiction.",
            ],
        },
        ComplianceSystemDefinition {
            key: "sprinkler_flow",
            name: "Sprinkler Main Drain and Flow Test",
            category: ComplianceCategory::FireSafety,
            frequency: Frequency::Quarterly,
            authority: "Fire Department",
            jurisdictions: &["nyc", "new_york_state"],
            estimated_cost: CostRange {
                min_cents: 15_000,
                max_cents: 40_000,
            },
            requirements: vec![
                "Exercise control valves and document pressure readings before and after flow.",
                "Verify fire pump churn where one is installed.",
            ],
        },
        ComplianceSystemDefinition {
            key: "elevator_cat1",
            name: "Elevator Category 1 Test",
            category: ComplianceCategory::Elevators,
            frequency: Frequency::Annual,
            authority: "Department of Buildings",
            jurisdictions: &["nyc"],
            estimated_cost: CostRange {
                min_cents: 50_000,
                max_cents: 150_000,
            },
            requirements: vec![
                "Witnessed no-load safety test by an approved elevator agency.",
                "File the inspection and test report within the filing window.",
            ],
        },
        ComplianceSystemDefinition {
            key: "boiler_lowpressure",
            name: "Low-Pressure Boiler Inspection",
            category: ComplianceCategory::BuildingSystems,
            frequency: Frequency::Annual,
            authority: "Department of Buildings",
            jurisdictions: &["nyc", "new_york_state"],
            estimated_cost: CostRange {
                min_cents: 25_000,
                max_cents: 60_000,
            },
            requirements: vec![
                "Internal and external inspection by a qualified boiler inspector.",
                "Correct and re-file any defects cited on the prior cycle.",
            ],
        },
        ComplianceSystemDefinition {
            key: "backflow_prevention",
            name: "Backflow Prevention Device Test",
            category: ComplianceCategory::Environmental,
            frequency: Frequency::Annual,
            authority: "Department of Environmental Protection",
            jurisdictions: &["nyc", "new_york_state", "new_jersey"],
            estimated_cost: CostRange {
                min_cents: 15_000,
                max_cents: 35_000,
            },
            requirements: vec![
                "Certified tester performs the annual device test.",
                "Submit the test report to the water authority.",
            ],
        },
        ComplianceSystemDefinition {
            key: "cooling_tower",
            name: "Cooling Tower Legionella Sampling",
            category: ComplianceCategory::Environmental,
            frequency: Frequency::Quarterly,
            authority: "Department of Health",
            jurisdictions: &["nyc"],
            estimated_cost: CostRange {
                min_cents: 20_000,
                max_cents: 50_000,
            },
            requirements: vec![
                "Collect and culture samples per the management program.",
                "Record disinfection response for any exceedance.",
            ],
        },
        ComplianceSystemDefinition {
            key: "emergency_lighting",
            name: "Emergency Lighting Function Test",
            category: ComplianceCategory::HealthSafety,
            frequency: Frequency::Monthly,
            authority: "Fire Department",
            jurisdictions: &["nyc", "new_york_state", "new_jersey"],
            estimated_cost: CostRange {
                min_cents: 5_000,
                max_cents: 15_000,
            },
            requirements: vec![
                "Thirty-second function test of every unit and exit sign.",
                "Log failures and replace batteries or lamps before the next cycle.",
            ],
        },
        ComplianceSystemDefinition {
            key: "pest_management",
            name: "Integrated Pest Management Service",
            category: ComplianceCategory::HealthSafety,
            frequency: Frequency::Monthly,
            authority: "Department of Health",
            jurisdictions: &["nyc", "new_jersey"],
            estimated_cost: CostRange {
                min_cents: 8_000,
                max_cents: 20_000,
            },
            requirements: vec![
                "Inspect common areas, refuse rooms, and reported units.",
                "Document findings and treatment in the service log.",
            ],
        },
        ComplianceSystemDefinition {
            key: "water_tank",
            name: "Rooftop Water Tank Inspection",
            category: ComplianceCategory::BuildingSystems,
            frequency: Frequency::Biannual,
            authority: "Department of Health",
            jurisdictions: &["nyc"],
            estimated_cost: CostRange {
                min_cents: 30_000,
                max_cents: 70_000,
            },
            requirements: vec![
                "Inspect, clean, and sample the tank; post results to tenants.",
            ],
        },
    ]
}
