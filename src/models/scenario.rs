//! What-if scenario catalog.
//!
//! Scenarios are immutable reference data describing operational
//! disruptions the simulator can evaluate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// Identifier of a catalog scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    StockyardLow,
    WagonShortage,
    UrgentOrder,
    WeatherDelay,
    PeakDemand,
}

/// Severity of a scenario's operational impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImpactLevel {
    Medium,
    High,
    Critical,
}

/// A what-if scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: ScenarioId,
    /// Human-readable name.
    pub name: &'static str,
    /// What the scenario simulates.
    pub description: &'static str,
    /// Impact severity.
    pub impact: ImpactLevel,
    /// Grouping category (e.g. "Inventory").
    pub category: &'static str,
    /// Estimated completion time under this scenario (hours).
    pub estimated_hours: f64,
    /// Number of rakes affected.
    pub affected_rakes: u32,
}

impl ScenarioId {
    /// All scenarios in catalog order.
    pub const ALL: [ScenarioId; 5] = [
        ScenarioId::StockyardLow,
        ScenarioId::WagonShortage,
        ScenarioId::UrgentOrder,
        ScenarioId::WeatherDelay,
        ScenarioId::PeakDemand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::StockyardLow => "stockyard-low",
            ScenarioId::WagonShortage => "wagon-shortage",
            ScenarioId::UrgentOrder => "urgent-order",
            ScenarioId::WeatherDelay => "weather-delay",
            ScenarioId::PeakDemand => "peak-demand",
        }
    }

    /// Catalog entry for this id.
    pub fn scenario(&self) -> Scenario {
        match self {
            ScenarioId::StockyardLow => Scenario {
                id: *self,
                name: "Stockyard Low Supply",
                description: "Simulate critical shortage in primary stockyard with only 40% inventory remaining",
                impact: ImpactLevel::High,
                category: "Inventory",
                estimated_hours: 9.8,
                affected_rakes: 3,
            },
            ScenarioId::WagonShortage => Scenario {
                id: *self,
                name: "Wagon Shortage",
                description: "Reduced wagon availability - only 8 out of 12 wagons operational due to maintenance",
                impact: ImpactLevel::Medium,
                category: "Resources",
                estimated_hours: 8.9,
                affected_rakes: 2,
            },
            ScenarioId::UrgentOrder => Scenario {
                id: *self,
                name: "Urgent Customer Order",
                description: "High-priority order requiring immediate dispatch within 6 hours for premium client",
                impact: ImpactLevel::Critical,
                category: "Operations",
                estimated_hours: 6.2,
                affected_rakes: 1,
            },
            ScenarioId::WeatherDelay => Scenario {
                id: *self,
                name: "Weather Disruption",
                description: "Heavy rainfall causing loading delays and reduced operational hours",
                impact: ImpactLevel::High,
                category: "External",
                estimated_hours: 11.5,
                affected_rakes: 4,
            },
            ScenarioId::PeakDemand => Scenario {
                id: *self,
                name: "Peak Demand Surge",
                description: "25% increase in order volume during festival season requiring optimal allocation",
                impact: ImpactLevel::High,
                category: "Demand",
                estimated_hours: 7.8,
                affected_rakes: 5,
            },
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioId {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| PlannerError::UnknownScenario(s.to_string()))
    }
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Medium => "Medium",
            ImpactLevel::High => "High",
            ImpactLevel::Critical => "Critical",
        }
    }
}

/// The full scenario catalog, in display order.
pub fn scenario_catalog() -> Vec<Scenario> {
    ScenarioId::ALL.iter().map(ScenarioId::scenario).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let catalog = scenario_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].id, ScenarioId::StockyardLow);
        assert_eq!(catalog[4].name, "Peak Demand Surge");
    }

    #[test]
    fn test_parse_round_trip() {
        for id in ScenarioId::ALL {
            assert_eq!(id.as_str().parse::<ScenarioId>().unwrap(), id);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "meteor-strike".parse::<ScenarioId>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownScenario(ref s) if s == "meteor-strike"));
    }

    #[test]
    fn test_urgent_order_is_critical() {
        let s = ScenarioId::UrgentOrder.scenario();
        assert_eq!(s.impact, ImpactLevel::Critical);
        assert_eq!(s.affected_rakes, 1);
        assert!((s.estimated_hours - 6.2).abs() < 1e-10);
        assert!(ImpactLevel::Critical > ImpactLevel::High);
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&ScenarioId::WeatherDelay).unwrap();
        assert_eq!(json, "\"weather-delay\"");
    }
}
