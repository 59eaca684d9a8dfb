//! Planner configuration.
//!
//! All fields have defaults matching the operations dashboard, so an
//! empty JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a planning session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Wagons in the rake.
    pub wagon_count: usize,
    /// Capacity of every wagon (tonnes).
    pub wagon_capacity: f64,
    /// Lower bound of a generated fill (tonnes, inclusive).
    pub fill_low: f64,
    /// Upper bound of a generated fill (tonnes, exclusive).
    pub fill_high: f64,
    /// Delay before an optimize result becomes visible (ms).
    pub optimize_delay_ms: u64,
    /// Delay before a simulation result becomes visible (ms).
    pub simulation_delay_ms: u64,
    /// Notifications retained in a session log.
    pub notification_capacity: usize,
    /// Seed for the fill generator. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            wagon_count: 12,
            wagon_capacity: 65.0,
            fill_low: 60.0,
            fill_high: 65.0,
            optimize_delay_ms: 2000,
            simulation_delay_ms: 3000,
            notification_capacity: 50,
            seed: None,
        }
    }
}

impl PlannerConfig {
    /// Parses a configuration from JSON and validates it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the wagon count.
    pub fn with_wagon_count(mut self, count: usize) -> Self {
        self.wagon_count = count;
        self
    }

    /// Sets the per-wagon capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.wagon_capacity = capacity;
        self
    }

    /// Sets the generated fill range `[low, high)`.
    pub fn with_fill_range(mut self, low: f64, high: f64) -> Self {
        self.fill_low = low;
        self.fill_high = high;
        self
    }

    /// Sets the optimize delay.
    pub fn with_optimize_delay(mut self, delay: Duration) -> Self {
        self.optimize_delay_ms = millis(delay);
        self
    }

    /// Sets the simulation delay.
    pub fn with_simulation_delay(mut self, delay: Duration) -> Self {
        self.simulation_delay_ms = millis(delay);
        self
    }

    /// Sets the fill generator seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Delay before an optimize result is applied.
    pub fn optimize_delay(&self) -> Duration {
        Duration::from_millis(self.optimize_delay_ms)
    }

    /// Delay before a simulation result is revealed.
    pub fn simulation_delay(&self) -> Duration {
        Duration::from_millis(self.simulation_delay_ms)
    }

    /// Checks that the configuration can produce a well-formed rake.
    ///
    /// Capacity and fill bounds must be finite. The fill range must lie
    /// within `[0, capacity]` so generated loads never exceed a wagon's
    /// capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wagon_count == 0 {
            return Err(ConfigError::NoWagons);
        }
        if !self.wagon_capacity.is_finite() || self.wagon_capacity <= 0.0 {
            return Err(ConfigError::InvalidCapacity(self.wagon_capacity));
        }
        let range_ok = self.fill_low.is_finite()
            && self.fill_high.is_finite()
            && self.fill_low >= 0.0
            && self.fill_low < self.fill_high;
        if !range_ok {
            return Err(ConfigError::InvalidFillRange {
                low: self.fill_low,
                high: self.fill_high,
            });
        }
        if self.fill_high > self.wagon_capacity {
            return Err(ConfigError::FillExceedsCapacity {
                high: self.fill_high,
                capacity: self.wagon_capacity,
            });
        }
        Ok(())
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`.
fn millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}
