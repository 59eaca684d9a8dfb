//! Wagon allocation store.
//!
//! Pure state transitions over an ordered wagon collection and the
//! metrics derived from it.
//!
//! # Operations
//!
//! - [`initialize`]: `count` empty wagons, types cycling BCN/BOXN/BRN.
//! - [`optimize`]: mock optimized assignment; fills come from a
//!   pluggable [`FillGenerator`] (default uniform `[60, 65)`).
//! - [`reset`]: every wagon back to empty. `reset(optimize(w)) == w`
//!   for any freshly initialized `w`.
//! - [`derive_metrics`]: allocated count, utilization, capacity.
//!
//! None of these fail. The delayed, busy-guarded presentation of
//! optimize lives in [`crate::planner`].

mod fill;
mod metrics;
mod store;

pub use fill::{ConstantFill, FillGenerator, UniformFill};
pub use metrics::{derive_metrics, AllocationMetrics, UtilizationRating, ESTIMATED_DISPATCH_HOURS};
pub use store::{
    initialize, initialize_with_capacity, optimize, reset, DEFAULT_CAPACITY, DESTINATIONS,
    MATERIALS, ORDER_ID_BASE, PRIORITY_PATTERN, WAGON_ID_BASE,
};
