//! Wagon model.
//!
//! A wagon is a single rail car in a rake. Its identity, type and
//! capacity are fixed at creation; its load (filled tonnage, order,
//! material, destination, priority) changes as plans are applied and reset.
//!
//! # Empty-state invariant
//! `filled == 0` exactly when the wagon carries no order, material
//! and destination.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rail wagon in the allocation grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wagon {
    /// Stable wagon identifier (e.g. `W-8800`).
    pub id: String,
    /// Wagon classification.
    pub wagon_type: WagonType,
    /// Maximum load (tonnes).
    pub capacity: f64,
    /// Currently assigned load (tonnes).
    pub filled: f64,
    /// Assigned order identifier.
    pub order: Option<String>,
    /// Material being carried.
    pub material: Option<String>,
    /// Dispatch destination.
    pub destination: Option<String>,
    /// Dispatch priority.
    pub priority: Option<Priority>,
    /// Loading status.
    pub status: WagonStatus,
}

/// Wagon classification (Indian Railways codes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WagonType {
    /// Covered bogie wagon.
    #[serde(rename = "BCN")]
    Bcn,
    /// Open high-sided bogie wagon.
    #[serde(rename = "BOXN")]
    Boxn,
    /// Flat bogie wagon for rails.
    #[serde(rename = "BRN")]
    Brn,
}

/// Display metadata for a wagon type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WagonTypeInfo {
    /// Wagon type code.
    pub wagon_type: WagonType,
    /// Human-readable name.
    pub name: &'static str,
    /// Typical cargo.
    pub description: &'static str,
}

/// Dispatch priority of a loaded wagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Loading status of a wagon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WagonStatus {
    /// No load assigned.
    #[default]
    Empty,
    /// Load assignment in progress.
    Loading,
    /// Load assigned.
    Loaded,
    /// Withdrawn for maintenance.
    Maintenance,
}

impl WagonType {
    /// All types in round-robin assignment order.
    pub const ALL: [WagonType; 3] = [WagonType::Bcn, WagonType::Boxn, WagonType::Brn];

    /// Type assigned to the wagon at `index` (cycles BCN, BOXN, BRN).
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Type code as printed on the wagon.
    pub fn code(&self) -> &'static str {
        match self {
            WagonType::Bcn => "BCN",
            WagonType::Boxn => "BOXN",
            WagonType::Brn => "BRN",
        }
    }

    /// Display metadata for this type.
    pub fn info(&self) -> WagonTypeInfo {
        let (name, description) = match self {
            WagonType::Bcn => ("Box Covered", "For weather-sensitive materials"),
            WagonType::Boxn => ("Box Open", "For general cargo & steel"),
            WagonType::Brn => ("Bogie Rail", "For rails & long materials"),
        };
        WagonTypeInfo {
            wagon_type: *self,
            name,
            description,
        }
    }
}

impl fmt::Display for WagonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl Wagon {
    /// Creates an empty wagon.
    pub fn new(id: impl Into<String>, wagon_type: WagonType, capacity: f64) -> Self {
        Self {
            id: id.into(),
            wagon_type,
            capacity,
            filled: 0.0,
            order: None,
            material: None,
            destination: None,
            priority: None,
            status: WagonStatus::Empty,
        }
    }

    /// Whether any load is assigned.
    pub fn is_allocated(&self) -> bool {
        self.filled > 0.0
    }

    /// Whether the wagon is in the unassigned state.
    pub fn is_empty(&self) -> bool {
        self.filled == 0.0
            && self.order.is_none()
            && self.material.is_none()
            && self.destination.is_none()
    }

    /// Load as a percentage of capacity (0.0..=100.0).
    pub fn fill_percent(&self) -> f64 {
        if self.capacity <= 0.0 {
            0.0
        } else {
            self.filled / self.capacity * 100.0
        }
    }

    /// Unused capacity (tonnes).
    pub fn headroom(&self) -> f64 {
        (self.capacity - self.filled).max(0.0)
    }

    /// Returns the wagon with its load cleared.
    pub fn cleared(mut self) -> Self {
        self.filled = 0.0;
        self.order = None;
        self.material = None;
        self.destination = None;
        self.priority = None;
        self.status = WagonStatus::Empty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wagon_is_empty() {
        let w = Wagon::new("W-8800", WagonType::Bcn, 65.0);
        assert!(w.is_empty());
        assert!(!w.is_allocated());
        assert_eq!(w.status, WagonStatus::Empty);
        assert!((w.headroom() - 65.0).abs() < 1e-10);
    }

    #[test]
    fn test_type_cycle() {
        let types: Vec<_> = (0..6).map(WagonType::for_index).collect();
        assert_eq!(
            types,
            vec![
                WagonType::Bcn,
                WagonType::Boxn,
                WagonType::Brn,
                WagonType::Bcn,
                WagonType::Boxn,
                WagonType::Brn,
            ]
        );
    }

    #[test]
    fn test_type_info() {
        assert_eq!(WagonType::Bcn.info().name, "Box Covered");
        assert_eq!(WagonType::Boxn.info().name, "Box Open");
        assert_eq!(WagonType::Brn.info().description, "For rails & long materials");
        assert_eq!(WagonType::Boxn.to_string(), "BOXN");
    }

    #[test]
    fn test_fill_percent() {
        let mut w = Wagon::new("W1", WagonType::Brn, 65.0);
        w.filled = 32.5;
        assert!((w.fill_percent() - 50.0).abs() < 1e-10);

        let zero = Wagon::new("W2", WagonType::Brn, 0.0);
        assert!((zero.fill_percent() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_cleared() {
        let mut w = Wagon::new("W1", WagonType::Boxn, 65.0);
        w.filled = 61.0;
        w.order = Some("ORD-2400".into());
        w.material = Some("Coal".into());
        w.destination = Some("Delhi NCR".into());
        w.priority = Some(Priority::High);
        w.status = WagonStatus::Loaded;

        let cleared = w.cleared();
        assert_eq!(cleared, Wagon::new("W1", WagonType::Boxn, 65.0));
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&WagonType::Boxn).unwrap();
        assert_eq!(json, "\"BOXN\"");
        let status: WagonStatus = serde_json::from_str("\"loaded\"").unwrap();
        assert_eq!(status, WagonStatus::Loaded);
        assert_eq!(Priority::Medium.as_str(), "medium");
    }
}
