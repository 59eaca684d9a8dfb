//! Operations session.
//!
//! Bundles the planner and the simulator of one dashboard session
//! around a single notification log.

use crate::allocation::{FillGenerator, UniformFill};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::notification::NotificationLog;
use crate::planner::RakePlanner;
use crate::reports::{self, ExportFormat};
use crate::simulation::ScenarioSimulator;
use crate::task::Completion;

/// Planner, simulator and notification log sharing one configuration.
#[derive(Debug, Clone)]
pub struct OperationsSession {
    pub planner: RakePlanner,
    pub simulator: ScenarioSimulator,
    notifications: NotificationLog,
}

impl OperationsSession {
    /// Creates a session with the uniform fill generator.
    pub fn new(config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        let generator = Box::new(UniformFill::from_config(&config));
        Self::with_generator(config, generator)
    }

    /// Creates a session with a custom fill generator.
    pub fn with_generator(
        config: PlannerConfig,
        generator: Box<dyn FillGenerator>,
    ) -> Result<Self, PlannerError> {
        let notifications = NotificationLog::new(config.notification_capacity);
        let simulator = ScenarioSimulator::with_notifications(&config, notifications.clone());
        let planner = RakePlanner::from_parts(config, generator, notifications.clone())?;
        Ok(Self {
            planner,
            simulator,
            notifications,
        })
    }

    /// Acknowledges a dispatch report export.
    pub fn export_report(&self, format: ExportFormat) -> Result<Completion<()>, PlannerError> {
        reports::request_export(format, &self.notifications)
    }

    pub fn notifications(&self) -> &NotificationLog {
        &self.notifications
    }
}
