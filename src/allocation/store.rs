//! Allocation store transitions.
//!
//! Pure functions over a wagon collection: each returns a new
//! collection and leaves its input untouched.
//!
//! # Optimized assignment
//!
//! | Field | Value for wagon `i` |
//! |-------|---------------------|
//! | filled | generator output, clamped to `[0, capacity]` |
//! | order | `ORD-{2400 + i}` |
//! | material | `MATERIALS[i % 5]` |
//! | destination | `DESTINATIONS[i % 5]` |
//! | priority | `PRIORITY_PATTERN[i % 12]` |
//! | status | loaded |

use tracing::{debug, warn};

use super::FillGenerator;
use crate::models::{Priority, Wagon, WagonStatus, WagonType};

/// Default wagon capacity (tonnes).
pub const DEFAULT_CAPACITY: f64 = 65.0;

/// First numeric suffix of generated wagon ids.
pub const WAGON_ID_BASE: usize = 8800;

/// First numeric suffix of generated order ids.
pub const ORDER_ID_BASE: usize = 2400;

/// Materials assigned round-robin.
pub const MATERIALS: [&str; 5] = [
    "Steel Coils",
    "Steel Plates",
    "Steel Rods",
    "Iron Ore",
    "Coal",
];

/// Destinations assigned round-robin.
pub const DESTINATIONS: [&str; 5] = [
    "Mumbai Port",
    "Delhi NCR",
    "Kolkata Hub",
    "Chennai Zone",
    "Bangalore Depot",
];

/// Priorities by wagon position, wrapping after 12.
pub const PRIORITY_PATTERN: [Priority; 12] = [
    Priority::High,
    Priority::High,
    Priority::Medium,
    Priority::High,
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Medium,
    Priority::Low,
    Priority::Medium,
    Priority::High,
    Priority::Medium,
];

/// Creates `count` empty wagons of [`DEFAULT_CAPACITY`].
pub fn initialize(count: usize) -> Vec<Wagon> {
    initialize_with_capacity(count, DEFAULT_CAPACITY)
}

/// Creates `count` empty wagons with types cycling BCN, BOXN, BRN.
pub fn initialize_with_capacity(count: usize, capacity: f64) -> Vec<Wagon> {
    (0..count)
        .map(|i| {
            Wagon::new(
                format!("W-{}", WAGON_ID_BASE + i),
                WagonType::for_index(i),
                capacity,
            )
        })
        .collect()
}

/// Applies the mock optimized assignment to every wagon.
pub fn optimize<G: FillGenerator + ?Sized>(wagons: &[Wagon], generator: &mut G) -> Vec<Wagon> {
    wagons
        .iter()
        .enumerate()
        .map(|(i, wagon)| {
            let raw = generator.fill(i, wagon);
            let filled = clamp_fill(raw, wagon.capacity);
            if filled != raw {
                warn!(wagon = %wagon.id, raw, filled, "generated fill clamped to capacity");
            }
            Wagon {
                filled,
                order: Some(format!("ORD-{}", ORDER_ID_BASE + i)),
                material: Some(MATERIALS[i % MATERIALS.len()].to_string()),
                destination: Some(DESTINATIONS[i % DESTINATIONS.len()].to_string()),
                priority: Some(PRIORITY_PATTERN[i % PRIORITY_PATTERN.len()]),
                status: WagonStatus::Loaded,
                ..wagon.clone()
            }
        })
        .collect()
}

/// Clears every wagon back to the empty state.
pub fn reset(wagons: &[Wagon]) -> Vec<Wagon> {
    debug!(wagons = wagons.len(), "resetting allocation");
    wagons.iter().cloned().map(Wagon::cleared).collect()
}

fn clamp_fill(raw: f64, capacity: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, capacity.max(0.0))
    }
}
