//! Precomputed what-if plans.
//!
//! No constraint solving happens here: each scenario maps to a fixed
//! adjusted plan, compared against one fixed baseline.
//!
//! | Scenario | Rakes | Util % | Cost | Time h |
//! |----------|-------|--------|------|--------|
//! | (baseline) | 18 | 96.4 | 245000 | 8.5 |
//! | stockyard-low | 19 | 88.2 | 258000 | 9.8 |
//! | wagon-shortage | 20 | 91.7 | 272000 | 8.9 |
//! | urgent-order | 19 | 94.8 | 268000 | 6.2 |
//! | weather-delay | 19 | 94.8 | 258000 | 8.9 |
//! | peak-demand | 19 | 94.8 | 258000 | 8.9 |

use serde::Serialize;

use crate::models::{PlanDelta, PlanSummary, ScenarioId};

/// Plan in force before any scenario is applied.
pub const ORIGINAL_PLAN: PlanSummary = PlanSummary {
    rakes: 18,
    utilization: 96.4,
    cost: 245_000.0,
    time_hours: 8.5,
};

/// Outcome of simulating one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    pub scenario: ScenarioId,
    pub original: PlanSummary,
    pub adjusted: PlanSummary,
    /// `adjusted - original`.
    pub delta: PlanDelta,
}

/// Adjusted plan for a scenario.
pub fn adjusted_plan(scenario: ScenarioId) -> PlanSummary {
    let rakes = match scenario {
        ScenarioId::WagonShortage => 20,
        _ => 19,
    };
    let utilization = match scenario {
        ScenarioId::StockyardLow => 88.2,
        ScenarioId::WagonShortage => 91.7,
        _ => 94.8,
    };
    let cost = match scenario {
        ScenarioId::UrgentOrder => 268_000.0,
        ScenarioId::WagonShortage => 272_000.0,
        _ => 258_000.0,
    };
    let time_hours = match scenario {
        ScenarioId::UrgentOrder => 6.2,
        ScenarioId::StockyardLow => 9.8,
        _ => 8.9,
    };
    PlanSummary::new(rakes, utilization, cost, time_hours)
}

/// Evaluates a scenario immediately.
pub fn simulate(scenario: ScenarioId) -> SimulationResult {
    let adjusted = adjusted_plan(scenario);
    SimulationResult {
        scenario,
        original: ORIGINAL_PLAN,
        adjusted,
        delta: adjusted.delta_from(&ORIGINAL_PLAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_order() {
        let r = simulate(ScenarioId::UrgentOrder);
        assert_eq!(r.original, PlanSummary::new(18, 96.4, 245_000.0, 8.5));
        assert_eq!(r.adjusted, PlanSummary::new(19, 94.8, 268_000.0, 6.2));
        assert_eq!(r.delta.rakes, 1);
        assert!(!r.delta.time_adverse());
    }

    #[test]
    fn test_table() {
        let expect = [
            (ScenarioId::StockyardLow, 19, 88.2, 258_000.0, 9.8),
            (ScenarioId::WagonShortage, 20, 91.7, 272_000.0, 8.9),
            (ScenarioId::UrgentOrder, 19, 94.8, 268_000.0, 6.2),
            (ScenarioId::WeatherDelay, 19, 94.8, 258_000.0, 8.9),
            (ScenarioId::PeakDemand, 19, 94.8, 258_000.0, 8.9),
        ];
        for (id, rakes, util, cost, time) in expect {
            assert_eq!(adjusted_plan(id), PlanSummary::new(rakes, util, cost, time), "{id}");
        }
    }

    #[test]
    fn test_every_scenario_costs_more() {
        for id in ScenarioId::ALL {
            let r = simulate(id);
            assert!(r.delta.cost_adverse());
            assert!(r.delta.utilization_adverse());
        }
    }
}
