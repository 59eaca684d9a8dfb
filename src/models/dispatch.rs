//! Dispatch report entries.

use serde::{Deserialize, Serialize};

/// One rake dispatch in the daily schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEntry {
    /// Rake identifier (e.g. `R-2401`).
    pub rake_id: String,
    /// Scheduled departure (HH:MM).
    pub time: String,
    /// Destination plant or hub.
    pub destination: String,
    /// Wagons in the rake.
    pub wagons: u32,
    /// Average wagon utilization (%).
    pub utilization: f64,
    /// Dispatch status.
    pub status: DispatchStatus,
}

/// Dispatch punctuality status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DispatchStatus {
    OnTime,
    Delayed,
    Risk,
}

/// Utilization band used to color dispatch rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilizationBand {
    /// Above 95%.
    High,
    /// Above 90%.
    Moderate,
    /// 90% or below.
    Low,
}

impl DispatchEntry {
    pub fn new(
        rake_id: impl Into<String>,
        time: impl Into<String>,
        destination: impl Into<String>,
        wagons: u32,
        utilization: f64,
        status: DispatchStatus,
    ) -> Self {
        Self {
            rake_id: rake_id.into(),
            time: time.into(),
            destination: destination.into(),
            wagons,
            utilization,
            status,
        }
    }

    /// Band of this dispatch's utilization.
    pub fn utilization_band(&self) -> UtilizationBand {
        UtilizationBand::of(self.utilization)
    }
}

impl DispatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStatus::OnTime => "on-time",
            DispatchStatus::Delayed => "delayed",
            DispatchStatus::Risk => "risk",
        }
    }
}

impl UtilizationBand {
    /// Band for a utilization percentage.
    pub fn of(utilization: f64) -> Self {
        if utilization > 95.0 {
            UtilizationBand::High
        } else if utilization > 90.0 {
            UtilizationBand::Moderate
        } else {
            UtilizationBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands() {
        assert_eq!(UtilizationBand::of(97.1), UtilizationBand::High);
        assert_eq!(UtilizationBand::of(95.0), UtilizationBand::Moderate);
        assert_eq!(UtilizationBand::of(91.2), UtilizationBand::Moderate);
        assert_eq!(UtilizationBand::of(90.0), UtilizationBand::Low);
        assert_eq!(UtilizationBand::of(88.3), UtilizationBand::Low);
    }

    #[test]
    fn test_status_serde() {
        let e = DispatchEntry::new("R-1", "08:15", "Rourkela", 12, 96.4, DispatchStatus::OnTime);
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["status"], "on-time");
        assert_eq!(e.status.as_str(), "on-time");
        assert_eq!(e.utilization_band(), UtilizationBand::High);
    }
}
