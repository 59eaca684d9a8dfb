//! Error types.

use thiserror::Error;

/// Errors raised by planner and simulator operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A delayed action of the same kind is still pending.
    #[error("{operation} already in progress")]
    Busy { operation: &'static str },

    /// Simulation was requested without choosing a scenario.
    #[error("no scenario selected")]
    NoScenarioSelected,

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("unknown wagon: {0}")]
    UnknownWagon(String),

    /// Delayed actions need a Tokio runtime to schedule on.
    #[error("no async runtime available to schedule the task")]
    NoRuntime,

    /// The scheduled completion panicked or its runtime shut down.
    #[error("delayed task did not complete")]
    TaskFailed,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid planner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("wagon count must be at least 1")]
    NoWagons,

    #[error("wagon capacity must be positive, got {0}")]
    InvalidCapacity(f64),

    #[error("fill range [{low}, {high}) is empty or negative")]
    InvalidFillRange { low: f64, high: f64 },

    #[error("fill range upper bound {high} exceeds wagon capacity {capacity}")]
    FillExceedsCapacity { high: f64, capacity: f64 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
