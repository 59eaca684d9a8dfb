//! Wagon collection validation.
//!
//! Checks structural integrity of a wagon collection, e.g. one loaded
//! from an external source. Detects:
//! - Duplicate wagon IDs
//! - Non-positive capacity
//! - Negative or non-finite loads
//! - Loads above capacity
//! - Wagons whose load and assignment disagree (empty-state invariant)

use std::collections::HashSet;

use crate::models::Wagon;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending wagon ID.
    pub wagon_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two wagons share the same ID.
    DuplicateId,
    /// Capacity is zero, negative or NaN.
    InvalidCapacity,
    /// Load is negative or not finite.
    InvalidFill,
    /// Load exceeds capacity.
    Overfilled,
    /// Loaded with no assignment, or assigned with no load.
    InconsistentAssignment,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, wagon: &Wagon, message: impl Into<String>) -> Self {
        Self {
            kind,
            wagon_id: wagon.id.clone(),
            message: message.into(),
        }
    }
}

/// Validates a wagon collection.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_wagons(wagons: &[Wagon]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for w in wagons {
        if !ids.insert(w.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                w,
                format!("Duplicate wagon ID: {}", w.id),
            ));
        }

        if w.capacity.is_nan() || w.capacity <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCapacity,
                w,
                format!("Wagon '{}' has invalid capacity {}", w.id, w.capacity),
            ));
        }

        if !w.filled.is_finite() || w.filled < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidFill,
                w,
                format!("Wagon '{}' has invalid load {}", w.id, w.filled),
            ));
        } else if w.filled > w.capacity {
            errors.push(ValidationError::new(
                ValidationErrorKind::Overfilled,
                w,
                format!(
                    "Wagon '{}' holds {:.1}T, above its {:.1}T capacity",
                    w.id, w.filled, w.capacity
                ),
            ));
        }

        if let Some(message) = assignment_mismatch(w) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentAssignment,
                w,
                message,
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `filled == 0` must coincide with having no order, material and destination.
fn assignment_mismatch(w: &Wagon) -> Option<String> {
    let assigned = w.order.is_some() || w.material.is_some() || w.destination.is_some();
    let loaded = w.filled != 0.0;
    match (loaded, assigned) {
        (true, false) => Some(format!("Wagon '{}' is loaded but has no assignment", w.id)),
        (false, true) => Some(format!("Wagon '{}' is assigned but carries no load", w.id)),
        _ => None,
    }
}
