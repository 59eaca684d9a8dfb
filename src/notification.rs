//! User-facing notifications.
//!
//! Planner and simulator actions post short notices (the dashboard's
//! toasts) into a shared, bounded [`NotificationLog`]. Every notice is
//! also emitted as a `tracing` event at the matching level.

use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Monotonic sequence number within the log.
    pub seq: u64,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug)]
struct LogState {
    entries: VecDeque<Notification>,
    next_seq: u64,
}

/// Bounded notification history, shared by cloning.
///
/// When full, the oldest notice is evicted.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    capacity: usize,
    state: Arc<Mutex<LogState>>,
}

impl NotificationLog {
    /// Creates a log retaining at most `capacity` notices (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            state: Arc::new(Mutex::new(LogState {
                entries: VecDeque::with_capacity(capacity),
                next_seq: 0,
            })),
        }
    }

    /// Appends a notice and returns its sequence number.
    pub fn push(&self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let message = message.into();
        match level {
            NotificationLevel::Info | NotificationLevel::Success => info!(?level, "{message}"),
            NotificationLevel::Warning => warn!("{message}"),
            NotificationLevel::Error => error!("{message}"),
        }

        let mut state = self.state.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        if state.entries.len() == self.capacity {
            state.entries.pop_front();
        }
        state.entries.push_back(Notification {
            seq,
            level,
            message,
        });
        seq
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Info, message)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NotificationLevel::Error, message)
    }

    /// Retained notices, oldest first.
    pub fn snapshot(&self) -> Vec<Notification> {
        self.state.lock().entries.iter().cloned().collect()
    }

    /// Most recent notice.
    pub fn latest(&self) -> Option<Notification> {
        self.state.lock().entries.back().cloned()
    }

    /// Removes and returns all retained notices.
    pub fn drain(&self) -> Vec<Notification> {
        self.state.lock().entries.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(50)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_snapshot() {
        let log = NotificationLog::new(10);
        log.info("first");
        log.warning("second");

        let entries = log.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].seq, 0);
        assert_eq!(entries[1].level, NotificationLevel::Warning);
        assert_eq!(log.latest().unwrap().message, "second");
    }

    #[test]
    fn test_evicts_oldest() {
        let log = NotificationLog::new(2);
        log.info("a");
        log.info("b");
        log.success("c");

        let messages: Vec<_> = log.snapshot().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(log.latest().unwrap().seq, 2);
    }

    #[test]
    fn test_shared_between_clones() {
        let log = NotificationLog::new(5);
        let other = log.clone();
        other.error("boom");
        assert_eq!(log.len(), 1);
        assert_eq!(log.drain().len(), 1);
        assert!(other.is_empty());
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let log = NotificationLog::new(0);
        assert_eq!(log.capacity(), 1);
        log.info("x");
        log.info("y");
        assert_eq!(log.len(), 1);
    }
}
