//! Plan summaries and comparisons.

use serde::{Deserialize, Serialize};

/// Headline figures of a rake formation plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    /// Number of rakes formed.
    pub rakes: u32,
    /// Average wagon utilization (%).
    pub utilization: f64,
    /// Estimated cost (INR).
    pub cost: f64,
    /// Estimated completion time (hours).
    pub time_hours: f64,
}

/// Signed difference `adjusted - original` between two plans.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanDelta {
    pub rakes: i64,
    pub utilization: f64,
    pub cost: f64,
    pub time_hours: f64,
}

impl PlanSummary {
    pub fn new(rakes: u32, utilization: f64, cost: f64, time_hours: f64) -> Self {
        Self {
            rakes,
            utilization,
            cost,
            time_hours,
        }
    }

    /// Difference from `original` to `self`.
    pub fn delta_from(&self, original: &PlanSummary) -> PlanDelta {
        PlanDelta {
            rakes: i64::from(self.rakes) - i64::from(original.rakes),
            utilization: self.utilization - original.utilization,
            cost: self.cost - original.cost,
            time_hours: self.time_hours - original.time_hours,
        }
    }
}

impl PlanDelta {
    /// More rakes are needed.
    pub fn rakes_adverse(&self) -> bool {
        self.rakes > 0
    }

    /// Utilization dropped.
    pub fn utilization_adverse(&self) -> bool {
        self.utilization < 0.0
    }

    /// Cost rose.
    pub fn cost_adverse(&self) -> bool {
        self.cost > 0.0
    }

    /// Completion takes longer.
    pub fn time_adverse(&self) -> bool {
        self.time_hours > 0.0
    }
}
