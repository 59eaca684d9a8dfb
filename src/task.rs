//! Single-shot delayed tasks.
//!
//! Optimize and simulation results become visible after a fixed delay.
//! Each is modeled as one scheduled completion on the Tokio runtime:
//!
//! - it runs exactly once, after the delay;
//! - dropping the returned [`Completion`] does not cancel it;
//! - a [`BusyGate`] rejects a second request of the same kind while one
//!   is pending instead of queueing it.
//!
//! The gate is acquired synchronously when the task is scheduled and
//! released by the task itself once its work has run. Callers that
//! announce the action use [`acquire`] and [`spawn_guarded`] so the
//! announcement is recorded before the task exists.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::error::PlannerError;

/// Rejects overlapping delayed actions of one kind.
#[derive(Debug, Clone)]
pub struct BusyGate {
    operation: &'static str,
    busy: Arc<AtomicBool>,
}

/// Holds a [`BusyGate`] closed until dropped.
#[derive(Debug)]
pub struct GateGuard {
    operation: &'static str,
    busy: Arc<AtomicBool>,
}

/// Handle to a scheduled completion.
#[derive(Debug)]
pub struct Completion<T> {
    handle: JoinHandle<T>,
}

impl BusyGate {
    /// Creates an open gate; `operation` names it in errors and logs.
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Closes the gate, or fails with [`PlannerError::Busy`] if already closed.
    pub fn try_acquire(&self) -> Result<GateGuard, PlannerError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| PlannerError::Busy {
                operation: self.operation,
            })?;
        trace!(operation = self.operation, "gate acquired");
        Ok(GateGuard {
            operation: self.operation,
            busy: Arc::clone(&self.busy),
        })
    }

    /// Whether a guarded task is pending.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

impl Drop for GateGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
        trace!(operation = self.operation, "gate released");
    }
}

impl<T> Completion<T> {
    /// Waits for the task to finish and returns its output.
    pub async fn wait(self) -> Result<T, PlannerError> {
        self.handle.await.map_err(|_| PlannerError::TaskFailed)
    }

    /// Whether the task has run (or panicked).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Fails with [`PlannerError::NoRuntime`] outside a Tokio runtime.
pub fn ensure_runtime() -> Result<(), PlannerError> {
    Handle::try_current().map_err(|_| PlannerError::NoRuntime)?;
    Ok(())
}

/// Runs `work` once after `delay`, without a gate.
///
/// Must be called from within a Tokio runtime.
pub fn spawn_delayed<T, F>(delay: Duration, work: F) -> Result<Completion<T>, PlannerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let runtime = Handle::try_current().map_err(|_| PlannerError::NoRuntime)?;
    let handle = runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        work()
    });
    Ok(Completion { handle })
}

/// Closes `gate` for a task about to be spawned.
///
/// Checks for a runtime first, so a failed call leaves the gate open.
/// Anything the caller does between this and [`spawn_guarded`] happens
/// before the task can run.
pub fn acquire(gate: &BusyGate) -> Result<GateGuard, PlannerError> {
    ensure_runtime()?;
    gate.try_acquire()
}

/// Runs `work` once after `delay`, releasing `guard` when it has run.
pub fn spawn_guarded<T, F>(
    guard: GateGuard,
    delay: Duration,
    work: F,
) -> Result<Completion<T>, PlannerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    spawn_delayed(delay, move || {
        let out = work();
        drop(guard);
        out
    })
}

/// Runs `work` once after `delay` while holding `gate`.
///
/// Fails immediately with [`PlannerError::Busy`] if the gate is closed,
/// or [`PlannerError::NoRuntime`] outside a Tokio runtime. In both
/// cases nothing is scheduled.
pub fn schedule<T, F>(
    gate: &BusyGate,
    delay: Duration,
    work: F,
) -> Result<Completion<T>, PlannerError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let guard = acquire(gate)?;
    spawn_guarded(guard, delay, work)
}
