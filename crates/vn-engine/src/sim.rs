//! The simulation record and its per-tick update.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;

use chrono::{DateTime, Utc};
use vn_core::{GeoPoint, Scenario, SimulationId, VehicleId};
use vn_metrics::{MetricsBlock, TickSample};
use vn_model::{Group, LearningConfig, Vehicle};

/// Lifecycle status.  Transitions are monotone: `Running → Stopped` is
/// terminal; nothing ever flips a record back to `Running`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Running,
    Stopped,
}

/// All mutable state of one simulation.
///
/// Guarded by the record mutex in [`SimCell`]; the tick loop and every
/// control operation acquire that lock, so no reader ever observes a
/// half-applied tick or patch.
#[derive(Debug)]
pub struct SimState {
    pub id:       SimulationId,
    pub status:   Status,
    pub scenario: Scenario,
    /// The *configured* density parameter, bounded [5, 50].  Distinct from
    /// the sampled vehicle-density metric (the live vehicle count).
    pub density:  u32,
    pub origin:   GeoPoint,

    pub started_at: DateTime<Utc>,
    pub ended_at:   Option<DateTime<Utc>>,
    /// Advisory run length from the create request; never enforced.
    pub duration_limit_secs: Option<u64>,
    pub owner:      String,

    pub vehicles: Vec<Vehicle>,
    /// Always empty in this engine — group formation is out of scope, but
    /// the container and its query surface exist.
    pub groups:   Vec<Group>,
    pub metrics:  MetricsBlock,
    pub learning: LearningConfig,

    /// Ticks applied so far.
    pub tick_count: u64,
}

impl SimState {
    /// Whole seconds since the simulation started, frozen at `ended_at` once
    /// it has stopped.
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        let end = self.ended_at.unwrap_or(now);
        (end - self.started_at).num_seconds().max(0)
    }

    pub fn find_vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| &v.id == id)
    }

    /// Apply one tick: advance every vehicle, aggregate, record.
    ///
    /// Returns `None` without touching anything if the record is stopped —
    /// a tick is never applied to a stopped simulation, even if the loop
    /// raced the status flip.
    pub(crate) fn apply_tick(&mut self, now: DateTime<Utc>) -> Option<TickSample> {
        if self.status != Status::Running {
            return None;
        }
        for vehicle in &mut self.vehicles {
            vehicle.advance(now);
        }
        let sample = TickSample::collect(&self.vehicles, self.groups.len());
        self.metrics.record(&sample);
        self.tick_count += 1;
        Some(sample)
    }
}

// ── SimCell ───────────────────────────────────────────────────────────────────

/// A registered simulation: the locked state plus its tick-thread handle.
///
/// The registry is the single owner; the tick thread and in-flight
/// operations hold `Arc` references scoped to their work.
pub struct SimCell {
    pub id: SimulationId,
    state:  Mutex<SimState>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl SimCell {
    pub fn new(state: SimState) -> Self {
        Self {
            id:     state.id.clone(),
            state:  Mutex::new(state),
            ticker: Mutex::new(None),
        }
    }

    /// Acquire the record lock.
    ///
    /// A poisoned lock means a tick thread panicked mid-update; the record
    /// is still structurally valid (worst case, one partially advanced
    /// tick), so the guard is recovered instead of cascading the panic.
    pub fn lock_state(&self) -> MutexGuard<'_, SimState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn set_ticker(&self, handle: JoinHandle<()>) {
        *self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    pub(crate) fn take_ticker(&self) -> Option<JoinHandle<()>> {
        self.ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Wake the tick thread out of its inter-tick sleep so it observes a
    /// status flip promptly instead of at the next scheduled fire.
    pub(crate) fn wake_ticker(&self) {
        if let Some(handle) = self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            handle.thread().unpark();
        }
    }
}
