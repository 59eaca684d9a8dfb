//! What-if scenario simulator.
//!
//! A scenario is selected, then a run reveals its precomputed plan
//! comparison after a fixed delay. The result depends only on the
//! scenario id, never on the current wagon state.
//!
//! Running without a selection posts a warning and changes nothing;
//! running while a simulation is pending fails with
//! [`PlannerError::Busy`].

mod lookup;

pub use lookup::{adjusted_plan, simulate, SimulationResult, ORIGINAL_PLAN};

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::models::{Scenario, ScenarioId};
use crate::notification::NotificationLog;
use crate::task::{self, BusyGate, Completion};

#[derive(Debug, Default)]
struct SimulatorState {
    selected: Option<ScenarioId>,
    last_result: Option<SimulationResult>,
}

#[derive(Debug)]
struct Inner {
    delay: Duration,
    state: Mutex<SimulatorState>,
    gate: BusyGate,
    notifications: NotificationLog,
}

/// Scenario simulation session. Clones share state.
#[derive(Debug, Clone)]
pub struct ScenarioSimulator {
    inner: Arc<Inner>,
}

impl ScenarioSimulator {
    /// Creates a simulator with its own notification log.
    pub fn new(config: &PlannerConfig) -> Self {
        Self::with_notifications(config, NotificationLog::new(config.notification_capacity))
    }

    /// Creates a simulator posting into a shared log.
    pub fn with_notifications(config: &PlannerConfig, notifications: NotificationLog) -> Self {
        Self {
            inner: Arc::new(Inner {
                delay: config.simulation_delay(),
                state: Mutex::new(SimulatorState::default()),
                gate: BusyGate::new("simulation"),
                notifications,
            }),
        }
    }

    /// Selects the scenario the next run simulates.
    pub fn select(&self, scenario: ScenarioId) {
        self.inner.state.lock().selected = Some(scenario);
    }

    /// Selects a scenario by its string id (e.g. `"urgent-order"`).
    pub fn select_id(&self, id: &str) -> Result<ScenarioId, PlannerError> {
        let scenario: ScenarioId = id.parse()?;
        self.select(scenario);
        Ok(scenario)
    }

    pub fn clear_selection(&self) {
        self.inner.state.lock().selected = None;
    }

    /// Catalog entry of the selected scenario.
    pub fn selected(&self) -> Option<Scenario> {
        self.inner.state.lock().selected.map(|id| id.scenario())
    }

    /// Schedules a simulation of the selected scenario.
    ///
    /// The scenario is captured now; changing the selection while the
    /// run is pending does not affect its result.
    pub fn run(&self) -> Result<Completion<SimulationResult>, PlannerError> {
        let Some(scenario) = self.inner.state.lock().selected else {
            self.inner
                .notifications
                .warning("Please select a scenario first");
            return Err(PlannerError::NoScenarioSelected);
        };

        let guard = task::acquire(&self.inner.gate)?;
        info!(%scenario, "simulation scheduled");
        self.inner.notifications.info("Running AI simulation...");

        let inner = Arc::clone(&self.inner);
        task::spawn_guarded(guard, self.inner.delay, move || inner.complete(scenario))
    }

    /// Result of the most recent completed run.
    pub fn last_result(&self) -> Option<SimulationResult> {
        self.inner.state.lock().last_result.clone()
    }

    /// Whether a run is pending.
    pub fn is_simulating(&self) -> bool {
        self.inner.gate.is_busy()
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.inner.notifications
    }
}

impl Inner {
    fn complete(&self, scenario: ScenarioId) -> SimulationResult {
        let result = simulate(scenario);
        self.state.lock().last_result = Some(result.clone());
        info!(
            %scenario,
            rakes = result.adjusted.rakes,
            utilization = result.adjusted.utilization,
            "simulation completed"
        );
        self.notifications.success("Simulation completed successfully!");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanSummary;
    use crate::notification::NotificationLevel;

    fn simulator() -> ScenarioSimulator {
        ScenarioSimulator::new(&PlannerConfig::default())
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_urgent_order() {
        let sim = simulator();
        sim.select_id("urgent-order").unwrap();

        let started = tokio::time::Instant::now();
        let result = sim.run().unwrap().wait().await.unwrap();
        assert!(started.elapsed() >= Duration::from_secs(3));

        assert_eq!(result.scenario, ScenarioId::UrgentOrder);
        assert_eq!(result.original, PlanSummary::new(18, 96.4, 245_000.0, 8.5));
        assert_eq!(result.adjusted, PlanSummary::new(19, 94.8, 268_000.0, 6.2));
        assert_eq!(sim.last_result(), Some(result));
    }

    #[test]
    fn test_run_without_selection_warns() {
        let sim = simulator();
        let err = sim.run().unwrap_err();
        assert!(matches!(err, PlannerError::NoScenarioSelected));

        let notice = sim.notifications().latest().unwrap();
        assert_eq!(notice.level, NotificationLevel::Warning);
        assert!(sim.last_result().is_none());
        assert!(!sim.is_simulating());
    }

    #[test]
    fn test_select_unknown() {
        let sim = simulator();
        assert!(matches!(
            sim.select_id("alien-invasion"),
            Err(PlannerError::UnknownScenario(_))
        ));
        assert!(sim.selected().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_pending() {
        let sim = simulator();
        sim.select(ScenarioId::WagonShortage);
        let first = sim.run().unwrap();
        assert!(sim.is_simulating());
        assert!(matches!(sim.run(), Err(PlannerError::Busy { operation: "simulation" })));

        let result = first.wait().await.unwrap();
        assert_eq!(result.adjusted.rakes, 20);
        assert!(!sim.is_simulating());
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_captured_at_run() {
        let sim = simulator();
        sim.select(ScenarioId::StockyardLow);
        let pending = sim.run().unwrap();
        sim.select(ScenarioId::UrgentOrder);

        let result = pending.wait().await.unwrap();
        assert_eq!(result.scenario, ScenarioId::StockyardLow);
        assert_eq!(sim.selected().unwrap().id, ScenarioId::UrgentOrder);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_announcement_precedes_result() {
        let config = PlannerConfig::default().with_simulation_delay(Duration::ZERO);
        for _ in 0..200 {
            let sim = ScenarioSimulator::new(&config);
            sim.select(ScenarioId::WeatherDelay);
            sim.run().unwrap().wait().await.unwrap();

            let entries = sim.notifications().snapshot();
            assert_eq!(entries.len(), 2);
            assert_eq!(entries[0].level, NotificationLevel::Info);
            assert_eq!(entries[0].message, "Running AI simulation...");
            assert_eq!(entries[1].level, NotificationLevel::Success);
        }
    }
}
