//! The `Engine` facade — every operation of the external interface.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use vn_core::{SimRng, SimulationId, VehicleId, VnError, VnResult};
use vn_metrics::{link_quality, MetricSeries, MetricsBlock, LINK_RANGE_M};
use vn_model::{generate_population, LearningConfig};

use crate::api::*;
use crate::hub::{BroadcastHub, Subscription};
use crate::registry::Registry;
use crate::scheduler;
use crate::sim::{SimCell, SimState, Status};

// ── Configuration ─────────────────────────────────────────────────────────────

/// Engine-wide settings.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Wall-clock period between ticks.  The production cadence is 1 s;
    /// tests shrink it to run in milliseconds.
    pub tick_period: Duration,
    /// Base RNG seed.  `Some` makes population generation deterministic
    /// (each created simulation derives its own seed from this plus a
    /// creation counter); `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_secs(1),
            seed:        None,
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The simulation engine: registry, tick scheduling, broadcast, and all
/// control/query operations.
///
/// `&self` everywhere — the engine is shared across caller threads behind an
/// `Arc` by the transport layer.  Dropping the engine stops every running
/// simulation and joins all tick threads.
pub struct Engine {
    registry: Registry,
    hub:      Arc<BroadcastHub>,
    config:   EngineConfig,
    created:  AtomicU64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            registry: Registry::new(),
            hub: Arc::new(BroadcastHub::new()),
            config,
            created: AtomicU64::new(0),
        }
    }

    // ── Create ────────────────────────────────────────────────────────────

    /// Validate parameters, generate the population, register the record as
    /// running, and start its tick loop.
    pub fn create(&self, params: CreateParams, owner: &str) -> VnResult<CreateReceipt> {
        validate_density(params.density)?;
        validate_location(params.location)?;

        let id = SimulationId::generate();
        let now = Utc::now();
        let mut rng = self.next_rng();
        let vehicles = generate_population(params.density, params.location, &mut rng);

        let state = SimState {
            id: id.clone(),
            status: Status::Running,
            scenario: params.scenario,
            density: params.density,
            origin: params.location,
            started_at: now,
            ended_at: None,
            duration_limit_secs: params.duration_secs,
            owner: owner.to_owned(),
            vehicles,
            groups: Vec::new(),
            metrics: MetricsBlock::new(params.density),
            learning: LearningConfig::default(),
            tick_count: 0,
        };

        let cell = Arc::new(SimCell::new(state));
        self.hub.register(&id);
        self.registry.insert(Arc::clone(&cell));

        let handle = scheduler::spawn_ticker(
            Arc::clone(&cell),
            Arc::clone(&self.hub),
            self.config.tick_period,
        );
        cell.set_ticker(handle);

        log::info!(
            "created simulation {id}: scenario {}, {} vehicles at {}",
            params.scenario,
            params.density,
            params.location
        );
        Ok(CreateReceipt {
            simulation_id: id,
            status:        Status::Running,
            started_at:    now,
        })
    }

    /// Identifiers of every registered simulation, optionally filtered to
    /// those created by `owner`.
    pub fn list(&self, owner: Option<&str>) -> Vec<SimulationId> {
        match owner {
            None => self.registry.ids(),
            Some(owner) => self
                .registry
                .cells()
                .into_iter()
                .filter(|cell| cell.lock_state().owner == owner)
                .map(|cell| cell.id.clone())
                .collect(),
        }
    }

    // ── Status / stop ─────────────────────────────────────────────────────

    pub fn status(&self, id: &SimulationId) -> VnResult<StatusReport> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();
        Ok(StatusReport {
            simulation_id: state.id.clone(),
            status:        state.status,
            scenario:      state.scenario,
            elapsed_secs:  state.elapsed_secs(Utc::now()),
            vehicle_count: state.vehicles.len(),
            group_count:   state.groups.len(),
        })
    }

    /// Transition `Running → Stopped` and compute the final averages.
    ///
    /// The tick loop observes the flip at its next wake-up (which this
    /// triggers immediately) and exits without further mutation.  Stopping
    /// an already-stopped simulation fails with the "not running" condition.
    pub fn stop(&self, id: &SimulationId) -> VnResult<StopSummary> {
        let cell = self.registry.get(id)?;

        let summary = {
            let mut state = cell.lock_state();
            if state.status != Status::Running {
                return Err(VnError::NotRunning(id.clone()));
            }
            let now = Utc::now();
            state.status = Status::Stopped;
            state.ended_at = Some(now);

            // Empty histories (stopped before the first tick) fall back to
            // the configured density and the nominal 0.15 link loss.
            let avg_density = non_empty_average(&state.metrics.vehicle_density)
                .unwrap_or(state.density as f64);
            let avg_link_loss = non_empty_average(&state.metrics.link_loss).unwrap_or(0.15);

            StopSummary {
                simulation_id:       state.id.clone(),
                status:              Status::Stopped,
                duration_secs:       state.elapsed_secs(now),
                avg_vehicle_density: avg_density,
                avg_link_loss,
                groups_formed:       state.groups.len(),
            }
        };

        cell.wake_ticker();
        log::info!("stopped simulation {id} after {}s", summary.duration_secs);
        Ok(summary)
    }

    /// Tear the record down entirely: stop it if still running, join its
    /// tick thread, close its broadcast topic, and drop it from the
    /// registry.  Optional — stopped records may be kept for read access.
    pub fn remove(&self, id: &SimulationId) -> VnResult<()> {
        let cell = self
            .registry
            .remove(id)
            .ok_or_else(|| VnError::SimulationNotFound(id.clone()))?;

        cell.lock_state().status = Status::Stopped;
        cell.wake_ticker();
        if let Some(handle) = cell.take_ticker() {
            let _ = handle.join();
        }
        self.hub.close(id);
        log::info!("removed simulation {id}");
        Ok(())
    }

    // ── Vehicle queries ───────────────────────────────────────────────────

    /// A page of vehicle summaries plus the simulation's total count.
    pub fn vehicles(&self, id: &SimulationId, limit: usize, offset: usize) -> VnResult<VehiclePage> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();

        let page = state
            .vehicles
            .iter()
            .skip(offset)
            .take(limit)
            .map(VehicleSummary::from)
            .collect();
        Ok(VehiclePage {
            count:    state.vehicles.len(),
            vehicles: page,
        })
    }

    /// One vehicle's full state, live in-range connections, and path.
    pub fn vehicle_detail(
        &self,
        id: &SimulationId,
        vehicle_id: &VehicleId,
    ) -> VnResult<VehicleDetail> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();

        let vehicle = state
            .find_vehicle(vehicle_id)
            .ok_or_else(|| VnError::VehicleNotFound(vehicle_id.clone()))?;

        let connections = state
            .vehicles
            .iter()
            .filter(|other| other.id != vehicle.id)
            .filter_map(|other| {
                let distance_m = vehicle.position.distance_m(other.position);
                (distance_m < LINK_RANGE_M).then(|| ConnectionInfo {
                    vehicle_id:   other.id.clone(),
                    link_quality: link_quality(vehicle.position, other.position),
                    distance_m,
                })
            })
            .collect();

        Ok(VehicleDetail {
            summary: VehicleSummary::from(vehicle),
            connections,
            path: vehicle.path.clone(),
        })
    }

    // ── Group query ───────────────────────────────────────────────────────

    pub fn groups(&self, id: &SimulationId) -> VnResult<GroupPage> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();

        let groups: Vec<GroupSummary> = state
            .groups
            .iter()
            .map(|g| GroupSummary {
                id:             g.id.clone(),
                size:           g.members.len(),
                centroid:       g.centroid,
                leader_id:      g.leader.clone(),
                members:        g.members.clone(),
                formation_time: g.formed_at,
                stability:      g.stability,
            })
            .collect();
        Ok(GroupPage {
            count: groups.len(),
            groups,
        })
    }

    // ── Metrics query ─────────────────────────────────────────────────────

    /// Current value, full-history average, and trailing window per metric.
    pub fn metrics(&self, id: &SimulationId, query: &MetricsQuery) -> VnResult<MetricsReport> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();

        let window = query.timeframe_secs as usize;
        let report = |series: &MetricSeries| MetricReport {
            current: series.current(),
            average: series.average(),
            history: series.window(window),
        };

        Ok(MetricsReport {
            simulation_id:   state.id.clone(),
            timestamp:       Utc::now(),
            timeframe_secs:  query.timeframe_secs,
            interval_secs:   query.interval_secs,
            vehicle_density: report(&state.metrics.vehicle_density),
            link_loss:       report(&state.metrics.link_loss),
            centrality:      report(&state.metrics.centrality),
            group_formation: report(&state.metrics.group_count),
        })
    }

    // ── Parameter patches ─────────────────────────────────────────────────

    /// Patch density and/or scenario on a running simulation.
    ///
    /// Validation happens before anything is applied, so a rejected patch
    /// leaves the record untouched.  Returns the fields actually updated.
    pub fn patch(&self, id: &SimulationId, params: &PatchParams) -> VnResult<PatchOutcome> {
        let cell = self.registry.get(id)?;
        let mut state = cell.lock_state();

        if state.status != Status::Running {
            return Err(VnError::NotRunning(id.clone()));
        }
        if let Some(density) = params.density {
            validate_density(density)?;
        }

        let mut updated = Vec::new();
        if let Some(density) = params.density {
            state.density = density;
            updated.push("density");
        }
        if let Some(scenario) = params.scenario {
            state.scenario = scenario;
            updated.push("scenario");
        }

        Ok(PatchOutcome {
            simulation_id: state.id.clone(),
            status:        state.status,
            updated,
            current: CurrentSettings {
                scenario: state.scenario,
                density:  state.density,
                location: state.origin,
            },
        })
    }

    // ── Learning configuration ────────────────────────────────────────────

    /// The stored learning configuration, verbatim.
    pub fn learning(&self, id: &SimulationId) -> VnResult<LearningConfig> {
        let cell = self.registry.get(id)?;
        let state = cell.lock_state();
        Ok(state.learning.clone())
    }

    /// Patch the two mutable learning rates.  Pure passthrough storage —
    /// nothing in the engine ever consults these values.
    pub fn patch_learning(
        &self,
        id: &SimulationId,
        patch: &LearningPatch,
    ) -> VnResult<LearningPatchOutcome> {
        let cell = self.registry.get(id)?;
        let mut state = cell.lock_state();

        if state.status != Status::Running {
            return Err(VnError::NotRunning(id.clone()));
        }
        if let Some(rate) = patch.learning_rate {
            validate_rate("learningRate", rate)?;
        }
        if let Some(rate) = patch.exploration_rate {
            validate_rate("explorationRate", rate)?;
        }

        let mut updated = Vec::new();
        if let Some(rate) = patch.learning_rate {
            state.learning.learning_rate = rate;
            updated.push("learningRate");
        }
        if let Some(rate) = patch.exploration_rate {
            state.learning.exploration_rate = rate;
            updated.push("explorationRate");
        }

        Ok(LearningPatchOutcome {
            updated,
            current: state.learning.clone(),
        })
    }

    // ── Live updates ──────────────────────────────────────────────────────

    /// Attach a live-update subscriber.  Unknown identifiers are rejected
    /// with `SimulationNotFound` (the transport closes the connection with
    /// that reason).
    pub fn subscribe(&self, id: &SimulationId) -> VnResult<Subscription> {
        self.registry.get(id)?;
        self.hub.subscribe(id)
    }

    // ── Shutdown ──────────────────────────────────────────────────────────

    /// Stop every running simulation and join all tick threads.
    pub fn shutdown(&self) {
        for cell in self.registry.cells() {
            cell.lock_state().status = Status::Stopped;
            cell.wake_ticker();
            if let Some(handle) = cell.take_ticker() {
                let _ = handle.join();
            }
            self.hub.close(&cell.id);
        }
        log::debug!("engine shut down ({} records retained)", self.registry.len());
    }

    fn next_rng(&self) -> SimRng {
        let index = self.created.fetch_add(1, Ordering::Relaxed);
        match self.config.seed {
            Some(base) => SimRng::derive(base, index),
            None       => SimRng::from_entropy(),
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

// ── Validation helpers ────────────────────────────────────────────────────────

fn validate_density(density: u32) -> VnResult<()> {
    if (5..=50).contains(&density) {
        Ok(())
    } else {
        Err(VnError::invalid(
            "density",
            format!("must be between 5 and 50 (got {density})"),
        ))
    }
}

fn validate_location(location: vn_core::GeoPoint) -> VnResult<()> {
    if !location.lat.is_finite() || !(-90.0..=90.0).contains(&location.lat) {
        return Err(VnError::invalid(
            "location",
            format!("latitude must be a finite value in [-90, 90] (got {})", location.lat),
        ));
    }
    if !location.lon.is_finite() || !(-180.0..=180.0).contains(&location.lon) {
        return Err(VnError::invalid(
            "location",
            format!("longitude must be a finite value in [-180, 180] (got {})", location.lon),
        ));
    }
    Ok(())
}

fn validate_rate(field: &'static str, rate: f64) -> VnResult<()> {
    if rate.is_finite() && (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(VnError::invalid(
            field,
            format!("must be between 0 and 1 (got {rate})"),
        ))
    }
}

/// `Some(average)` for a non-empty series, `None` otherwise.
fn non_empty_average(series: &MetricSeries) -> Option<f64> {
    (!series.is_empty()).then(|| series.average())
}
