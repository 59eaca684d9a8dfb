//! Rake planner session.
//!
//! Owns one wagon collection for the lifetime of a session and layers
//! the interactive behavior over the pure [`crate::allocation`] store:
//!
//! - `optimize` reveals the mock assignment after a fixed delay and is
//!   rejected while a previous request is pending;
//! - `reset` is immediate and clears the current selection;
//! - wagons can be selected for inspection.
//!
//! The handle is cheap to clone; clones share the same session.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info};

use crate::allocation::{self, AllocationMetrics, FillGenerator, UniformFill};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::Wagon;
use crate::notification::NotificationLog;
use crate::task::{self, BusyGate, Completion};

#[derive(Debug)]
struct PlannerState {
    wagons: Vec<Wagon>,
    selected: Option<String>,
}

#[derive(Debug)]
struct Inner {
    config: PlannerConfig,
    state: Mutex<PlannerState>,
    generator: Mutex<Box<dyn FillGenerator>>,
    gate: BusyGate,
    notifications: NotificationLog,
}

/// Interactive wagon allocation session.
///
/// # Example
///
/// ```
/// use rake_planner::config::PlannerConfig;
/// use rake_planner::planner::RakePlanner;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), rake_planner::PlannerError> {
/// let planner = RakePlanner::new(PlannerConfig::default().with_seed(1))?;
/// assert_eq!(planner.metrics().allocated, 0);
///
/// let metrics = planner.optimize()?.wait().await?;
/// assert_eq!(metrics.allocated, 12);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RakePlanner {
    inner: Arc<Inner>,
}

impl RakePlanner {
    /// Creates a session with a uniform fill generator and its own log.
    ///
    /// The generator is seeded from `config.seed` when present.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let generator = Box::new(UniformFill::from_config(&config));
        let notifications = NotificationLog::new(config.notification_capacity);
        Self::from_parts(config, generator, notifications)
    }

    /// Creates a session from explicit collaborators.
    pub fn from_parts(
        config: PlannerConfig,
        generator: Box<dyn FillGenerator>,
        notifications: NotificationLog,
    ) -> Result<Self, PlannerError> {
        config.validate()?;
        let wagons =
            allocation::initialize_with_capacity(config.wagon_count, config.wagon_capacity);
        debug!(
            wagons = wagons.len(),
            capacity = config.wagon_capacity,
            "planner initialized"
        );
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                state: Mutex::new(PlannerState {
                    wagons,
                    selected: None,
                }),
                generator: Mutex::new(generator),
                gate: BusyGate::new("optimize"),
                notifications,
            }),
        })
    }

    /// Schedules the mock optimized assignment.
    ///
    /// The wagons change only when the returned completion fires, after
    /// `config.optimize_delay()`. While it is pending, further calls fail
    /// with [`PlannerError::Busy`] and leave the state untouched.
    pub fn optimize(&self) -> Result<Completion<AllocationMetrics>, PlannerError> {
        let guard = task::acquire(&self.inner.gate)?;
        info!(delay_ms = self.inner.config.optimize_delay_ms, "optimize scheduled");
        self.inner
            .notifications
            .info("AI analyzing orders, stockyard inventory, and wagon constraints...");

        let inner = Arc::clone(&self.inner);
        task::spawn_guarded(guard, self.inner.config.optimize_delay(), move || {
            inner.apply_optimize()
        })
    }

    /// Clears every wagon and the selection.
    pub fn reset(&self) -> AllocationMetrics {
        let metrics = {
            let mut state = self.inner.state.lock();
            state.wagons = allocation::reset(&state.wagons);
            state.selected = None;
            AllocationMetrics::calculate(&state.wagons)
        };
        info!("rake reset");
        self.inner.notifications.info("Rake reset to empty state");
        metrics
    }

    /// Selects a wagon, or deselects it if already selected.
    ///
    /// Returns the new selection.
    pub fn toggle_selection(&self, wagon_id: &str) -> Result<Option<String>, PlannerError> {
        let mut state = self.inner.state.lock();
        if !state.wagons.iter().any(|w| w.id == wagon_id) {
            return Err(PlannerError::UnknownWagon(wagon_id.to_string()));
        }
        state.selected = match state.selected.as_deref() {
            Some(current) if current == wagon_id => None,
            _ => Some(wagon_id.to_string()),
        };
        Ok(state.selected.clone())
    }

    /// Deselects any selected wagon.
    pub fn clear_selection(&self) {
        self.inner.state.lock().selected = None;
    }

    /// Currently selected wagon, if any.
    pub fn selected(&self) -> Option<Wagon> {
        let state = self.inner.state.lock();
        let id = state.selected.as_deref()?;
        state.wagons.iter().find(|w| w.id == id).cloned()
    }

    /// Snapshot of the wagon collection.
    pub fn wagons(&self) -> Vec<Wagon> {
        self.inner.state.lock().wagons.clone()
    }

    /// Looks up a wagon by id.
    pub fn wagon(&self, wagon_id: &str) -> Option<Wagon> {
        self.inner
            .state
            .lock()
            .wagons
            .iter()
            .find(|w| w.id == wagon_id)
            .cloned()
    }

    /// Metrics for the current state, recomputed on every call.
    pub fn metrics(&self) -> AllocationMetrics {
        AllocationMetrics::calculate(&self.inner.state.lock().wagons)
    }

    /// Whether an optimize request is pending.
    pub fn is_optimizing(&self) -> bool {
        self.inner.gate.is_busy()
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.inner.notifications
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.inner.config
    }
}

impl Inner {
    fn apply_optimize(&self) -> AllocationMetrics {
        let metrics = {
            let mut state = self.state.lock();
            let mut generator = self.generator.lock();
            state.wagons = allocation::optimize(&state.wagons, &mut **generator);
            AllocationMetrics::calculate(&state.wagons)
        };
        info!(
            allocated = metrics.allocated,
            utilization = metrics.avg_utilization,
            "optimize applied"
        );
        self.notifications.success(format!(
            "AI optimized rake formation! {:.1}% utilization",
            metrics.avg_utilization
        ));
        metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::ConstantFill;
    use crate::models::{WagonStatus, WagonType};
    use crate::notification::NotificationLevel;
    use std::time::Duration;

    fn planner() -> RakePlanner {
        RakePlanner::new(PlannerConfig::default().with_seed(42)).unwrap()
    }

    #[test]
    fn test_new_session_is_empty() {
        let p = planner();
        let wagons = p.wagons();
        assert_eq!(wagons.len(), 12);
        assert_eq!(wagons[1].wagon_type, WagonType::Boxn);
        assert!(wagons.iter().all(Wagon::is_empty));

        let m = p.metrics();
        assert_eq!(m.allocated, 0);
        assert!((m.avg_utilization - 0.0).abs() < 1e-10);
        assert!((m.total_capacity - 780.0).abs() < 1e-10);
        assert!(!p.is_optimizing());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = RakePlanner::new(PlannerConfig::default().with_wagon_count(0)).unwrap_err();
        assert!(matches!(err, PlannerError::Config(_)));

        let infinite = PlannerConfig::default()
            .with_capacity(f64::INFINITY)
            .with_fill_range(0.0, f64::INFINITY);
        assert!(matches!(RakePlanner::new(infinite), Err(PlannerError::Config(_))));
    }

    #[test]
    fn test_optimize_needs_runtime() {
        let p = planner();
        assert!(matches!(p.optimize(), Err(PlannerError::NoRuntime)));
        assert!(!p.is_optimizing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_optimize_end_to_end() {
        let p = planner();
        let completion = p.optimize().unwrap();
        assert!(p.is_optimizing());

        let m = completion.wait().await.unwrap();
        assert!(!p.is_optimizing());
        assert_eq!(m.allocated, 12);
        assert!(m.avg_utilization >= 60.0 / 65.0 * 100.0 - 1e-9);
        assert!(m.avg_utilization < 100.0);

        for w in p.wagons() {
            assert!(w.filled >= 60.0 && w.filled < 65.0);
            assert_eq!(w.status, WagonStatus::Loaded);
        }
        assert_eq!(p.metrics(), m);
    }

    #[tokio::test(start_paused = true)]
    async fn test_optimize_waits_for_delay() {
        let p = planner();
        let completion = p.optimize().unwrap();

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(p.wagons().iter().all(Wagon::is_empty));
        assert!(!completion.is_finished());

        completion.wait().await.unwrap();
        assert!(p.wagons().iter().all(|w| !w.is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_optimize_rejected_while_pending() {
        let p = planner();
        let first = p.optimize().unwrap();

        let err = p.optimize().unwrap_err();
        assert!(matches!(err, PlannerError::Busy { operation: "optimize" }));
        assert!(p.wagons().iter().all(Wagon::is_empty));

        first.wait().await.unwrap();
        assert_eq!(p.metrics().allocated, 12);
        assert!(p.optimize().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_after_optimize_restores_initial_state() {
        let p = planner();
        let initial = p.wagons();
        p.optimize().unwrap().wait().await.unwrap();
        p.toggle_selection("W-8803").unwrap();

        let m = p.reset();
        assert_eq!(m.allocated, 0);
        assert_eq!(p.wagons(), initial);
        assert!(p.selected().is_none());
    }

    #[test]
    fn test_selection_toggle() {
        let p = planner();
        assert_eq!(p.toggle_selection("W-8805").unwrap().as_deref(), Some("W-8805"));
        assert_eq!(p.selected().unwrap().id, "W-8805");
        assert_eq!(p.toggle_selection("W-8800").unwrap().as_deref(), Some("W-8800"));
        assert_eq!(p.toggle_selection("W-8800").unwrap(), None);

        let err = p.toggle_selection("W-9999").unwrap_err();
        assert!(matches!(err, PlannerError::UnknownWagon(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_notifications_posted() {
        let log = NotificationLog::new(10);
        let p = RakePlanner::from_parts(
            PlannerConfig::default(),
            Box::new(ConstantFill(63.7)),
            log.clone(),
        )
        .unwrap();

        p.optimize().unwrap().wait().await.unwrap();
        p.reset();

        let entries = log.snapshot();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].level, NotificationLevel::Info);
        assert_eq!(entries[1].level, NotificationLevel::Success);
        assert!(entries[1].message.contains("98.0% utilization"));
        assert_eq!(entries[2].message, "Rake reset to empty state");
    }

    #[tokio::test(start_paused = true)]
    async fn test_clones_share_session() {
        let p = planner();
        let other = p.clone();
        p.optimize().unwrap();
        assert!(other.is_optimizing());
        assert!(matches!(other.optimize(), Err(PlannerError::Busy { .. })));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_announcement_precedes_result() {
        for _ in 0..200 {
            let log = NotificationLog::new(10);
            let p = RakePlanner::from_parts(
                PlannerConfig::default().with_optimize_delay(Duration::ZERO),
                Box::new(ConstantFill(62.0)),
                log.clone(),
            )
            .unwrap();

            p.optimize().unwrap().wait().await.unwrap();
            let entries = log.snapshot();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].level, NotificationLevel::Info);
            assert_eq!(entries[1].level, NotificationLevel::Success);
        }
    }
}
