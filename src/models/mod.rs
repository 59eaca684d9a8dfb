//! Rake planning domain models.
//!
//! Provides the record types shared by the allocation store, the
//! scenario simulator and the reference tables.
//!
//! # Domain Mappings
//!
//! | rake-planner | Railway operations |
//! |--------------|--------------------|
//! | Wagon | Rail car (BCN/BOXN/BRN) |
//! | Scenario | What-if disruption |
//! | PlanSummary | Rake formation plan headline |
//! | DispatchEntry | Scheduled rake departure |

mod dispatch;
mod plan;
mod scenario;
mod wagon;

pub use dispatch::{DispatchEntry, DispatchStatus, UtilizationBand};
pub use plan::{PlanDelta, PlanSummary};
pub use scenario::{scenario_catalog, ImpactLevel, Scenario, ScenarioId};
pub use wagon::{Priority, Wagon, WagonStatus, WagonType, WagonTypeInfo};
