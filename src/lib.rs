//! Rake formation planning state for rail-wagon operations dashboards.
//!
//! Provides the wagon allocation store behind the rake planner view,
//! the what-if scenario simulator, and the reference data for the
//! dispatch report and KPI overview. No real optimizer runs here: the
//! "AI" actions are mock assignments and table lookups revealed after a
//! fixed delay.
//!
//! # Modules
//!
//! - **`allocation`**: Pure store: `initialize`, `optimize`, `reset`,
//!   `derive_metrics`, pluggable `FillGenerator`
//! - **`planner`**: `RakePlanner` session with the delayed, busy-guarded
//!   optimize action and wagon selection
//! - **`simulation`**: `ScenarioSimulator` and the scenario plan table
//! - **`reports`** / **`dashboard`**: Dispatch schedule and KPI reference data
//! - **`validation`**: Wagon collection integrity checks
//! - **`task`**: Single-shot, non-cancellable delayed completions
//!
//! # Example
//!
//! ```
//! use rake_planner::allocation::{derive_metrics, initialize, optimize, reset, UniformFill};
//!
//! let wagons = initialize(12);
//! let mut fill = UniformFill::seeded(60.0, 65.0, 42);
//! let loaded = optimize(&wagons, &mut fill);
//!
//! let metrics = derive_metrics(&loaded);
//! assert_eq!(metrics.allocated, 12);
//! assert!(metrics.avg_utilization >= 92.3 && metrics.avg_utilization < 100.0);
//! assert_eq!(reset(&loaded), wagons);
//! ```

pub mod allocation;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod notification;
pub mod planner;
pub mod reports;
pub mod session;
pub mod simulation;
pub mod task;
pub mod validation;

pub use config::PlannerConfig;
pub use error::{ConfigError, PlannerError};
pub use planner::RakePlanner;
pub use session::OperationsSession;
pub use simulation::ScenarioSimulator;
