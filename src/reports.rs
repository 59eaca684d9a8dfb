//! Daily dispatch report.
//!
//! Static dispatch rows plus the summary cards shown above them.
//! Export is an acknowledgment only: it posts progress notices and
//! produces no file.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::PlannerError;
use crate::models::{DispatchEntry, DispatchStatus};
use crate::notification::NotificationLog;
use crate::task::{self, Completion};

/// Delay before an export is acknowledged as finished.
pub const EXPORT_DELAY: Duration = Duration::from_millis(1500);

/// Counts by dispatch status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub at_risk: usize,
    /// Mean utilization across dispatches (%).
    pub avg_utilization: f64,
    /// Wagons across all dispatches.
    pub total_wagons: u32,
}

/// Report export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
        })
    }
}

/// Today's dispatch schedule.
pub fn dispatch_schedule() -> Vec<DispatchEntry> {
    use DispatchStatus::*;
    vec![
        DispatchEntry::new("R-2401", "08:15", "Rourkela", 12, 96.4, OnTime),
        DispatchEntry::new("R-2402", "10:30", "Bhilai", 14, 94.8, OnTime),
        DispatchEntry::new("R-2403", "12:45", "Bokaro", 11, 91.2, Delayed),
        DispatchEntry::new("R-2404", "14:00", "Durgapur", 13, 95.6, OnTime),
        DispatchEntry::new("R-2405", "15:30", "Jamshedpur", 12, 88.3, Risk),
        DispatchEntry::new("R-2406", "17:00", "Rourkela", 15, 97.1, OnTime),
    ]
}

impl ReportSummary {
    /// Summarizes a dispatch schedule.
    pub fn calculate(entries: &[DispatchEntry]) -> Self {
        let count = |status: DispatchStatus| entries.iter().filter(|e| e.status == status).count();
        let avg_utilization = if entries.is_empty() {
            0.0
        } else {
            entries.iter().map(|e| e.utilization).sum::<f64>() / entries.len() as f64
        };

        Self {
            total: entries.len(),
            on_time: count(DispatchStatus::OnTime),
            delayed: count(DispatchStatus::Delayed),
            at_risk: count(DispatchStatus::Risk),
            avg_utilization,
            total_wagons: entries.iter().map(|e| e.wagons).sum(),
        }
    }
}

/// Acknowledges an export request.
///
/// Posts "Exporting report as {FORMAT}..." now and a completion notice
/// after [`EXPORT_DELAY`]. Requests are not deduplicated.
pub fn request_export(
    format: ExportFormat,
    notifications: &NotificationLog,
) -> Result<Completion<()>, PlannerError> {
    task::ensure_runtime()?;
    notifications.success(format!("Exporting report as {format}..."));

    let log = notifications.clone();
    task::spawn_delayed(EXPORT_DELAY, move || {
        log.success("Report exported successfully!");
    })
}
