//! Allocation metrics (KPIs).
//!
//! Derived from a wagon collection on demand; nothing is cached.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Allocated | Wagons with `filled > 0` |
//! | Allocated share | 100 × allocated / total |
//! | Avg utilization | 100 × Σfilled / Σcapacity |
//! | Total capacity | Σcapacity (= count × per-wagon capacity) |
//! | Est. time | 6.5 h once anything is loaded |

use serde::Serialize;

use crate::models::Wagon;

/// Loading + dispatch estimate shown once any wagon is allocated (hours).
pub const ESTIMATED_DISPATCH_HOURS: f64 = 6.5;

/// Allocation performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationMetrics {
    /// Wagons in the collection.
    pub total_wagons: usize,
    /// Wagons with a non-zero load.
    pub allocated: usize,
    /// Allocated wagons as a share of all wagons (%).
    pub allocated_percent: f64,
    /// Loaded tonnage as a share of total capacity (%).
    pub avg_utilization: f64,
    /// Sum of loads (tonnes).
    pub total_filled: f64,
    /// Sum of capacities (tonnes).
    pub total_capacity: f64,
    /// Loading + dispatch estimate (hours), if anything is loaded.
    pub estimated_hours: Option<f64>,
}

/// Qualitative utilization rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UtilizationRating {
    /// Above 95%.
    Excellent,
    /// Above 85%.
    Good,
    CanImprove,
}

impl AllocationMetrics {
    /// Computes metrics for a wagon collection.
    ///
    /// An empty collection yields zero utilization rather than NaN.
    pub fn calculate(wagons: &[Wagon]) -> Self {
        let total_wagons = wagons.len();
        let allocated = wagons.iter().filter(|w| w.is_allocated()).count();
        let total_filled: f64 = wagons.iter().map(|w| w.filled).sum();
        let total_capacity: f64 = wagons.iter().map(|w| w.capacity).sum();

        let avg_utilization = if total_capacity > 0.0 {
            total_filled / total_capacity * 100.0
        } else {
            0.0
        };

        let allocated_percent = if total_wagons == 0 {
            0.0
        } else {
            allocated as f64 / total_wagons as f64 * 100.0
        };

        Self {
            total_wagons,
            allocated,
            allocated_percent,
            avg_utilization,
            total_filled,
            total_capacity,
            estimated_hours: (allocated > 0).then_some(ESTIMATED_DISPATCH_HOURS),
        }
    }

    /// Rating of the average utilization.
    pub fn rating(&self) -> UtilizationRating {
        UtilizationRating::of(self.avg_utilization)
    }

    /// Whether every wagon carries a load.
    pub fn fully_allocated(&self) -> bool {
        self.total_wagons > 0 && self.allocated == self.total_wagons
    }
}

impl UtilizationRating {
    /// Rates a utilization percentage.
    pub fn of(utilization: f64) -> Self {
        if utilization > 95.0 {
            UtilizationRating::Excellent
        } else if utilization > 85.0 {
            UtilizationRating::Good
        } else {
            UtilizationRating::CanImprove
        }
    }

    /// Display label, e.g. `"Excellent!"`.
    pub fn label(&self) -> &'static str {
        match self {
            UtilizationRating::Excellent => "Excellent!",
            UtilizationRating::Good => "Good",
            UtilizationRating::CanImprove => "Can improve",
        }
    }
}

/// Shorthand for [`AllocationMetrics::calculate`].
pub fn derive_metrics(wagons: &[Wagon]) -> AllocationMetrics {
    AllocationMetrics::calculate(wagons)
}
