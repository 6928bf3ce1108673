//! Request and response types of the external interface.
//!
//! These structs are the boundary contract the transport layer (HTTP,
//! WebSocket, or anything else) serializes; field names follow the wire
//! format clients already speak (camelCase, `lng` for longitude,
//! `groupFormation` for the group-count series).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vn_core::{GeoPoint, GroupId, Scenario, SimulationId, VehicleId};
use vn_metrics::TickSample;
use vn_model::{LearningConfig, PathHistory, Vehicle};

use crate::sim::Status;

// ── Create ────────────────────────────────────────────────────────────────────

/// Parameters for creating a simulation.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateParams {
    pub scenario: Scenario,
    /// Requested vehicle population, bounded [5, 50].
    pub density:  u32,
    pub location: GeoPoint,
    /// Advisory run length; stored and echoed, never enforced by the engine.
    #[serde(default)]
    pub duration_secs: Option<u64>,
}

/// Returned by a successful create.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReceipt {
    pub simulation_id: SimulationId,
    pub status:        Status,
    pub started_at:    DateTime<Utc>,
}

// ── Status / stop ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub simulation_id: SimulationId,
    pub status:        Status,
    pub scenario:      Scenario,
    pub elapsed_secs:  i64,
    pub vehicle_count: usize,
    pub group_count:   usize,
}

/// Final figures computed when a simulation stops.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopSummary {
    pub simulation_id:       SimulationId,
    pub status:              Status,
    pub duration_secs:       i64,
    pub avg_vehicle_density: f64,
    pub avg_link_loss:       f64,
    pub groups_formed:       usize,
}

// ── Vehicles ──────────────────────────────────────────────────────────────────

/// One vehicle without its path history (the list view).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub id:       VehicleId,
    pub position: GeoPoint,
    #[serde(rename = "speed")]
    pub speed_kmh: u32,
    #[serde(rename = "direction")]
    pub direction_deg: u16,
    pub group_id: Option<GroupId>,
    #[serde(rename = "density")]
    pub density_weight: f64,
    pub link_loss:  f64,
    pub centrality: f64,
}

impl From<&Vehicle> for VehicleSummary {
    fn from(v: &Vehicle) -> Self {
        Self {
            id:             v.id.clone(),
            position:       v.position,
            speed_kmh:      v.speed_kmh,
            direction_deg:  v.direction_deg,
            group_id:       v.group.clone(),
            density_weight: v.density_weight,
            link_loss:      v.link_loss,
            centrality:     v.centrality,
        }
    }
}

/// A page of vehicle summaries; `count` is the simulation's total, not the
/// page length.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePage {
    pub count:    usize,
    pub vehicles: Vec<VehicleSummary>,
}

/// Another vehicle currently within radio range.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    pub vehicle_id:   VehicleId,
    pub link_quality: f64,
    #[serde(rename = "distance")]
    pub distance_m:   f64,
}

/// One vehicle's full state: summary fields, live connections, path history.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub summary:     VehicleSummary,
    pub connections: Vec<ConnectionInfo>,
    pub path:        PathHistory,
}

// ── Groups ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub id:             GroupId,
    pub size:           usize,
    pub centroid:       GeoPoint,
    pub leader_id:      VehicleId,
    pub members:        Vec<VehicleId>,
    pub formation_time: DateTime<Utc>,
    pub stability:      f64,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupPage {
    pub count:  usize,
    pub groups: Vec<GroupSummary>,
}

// ── Metrics query ─────────────────────────────────────────────────────────────

/// Timeframe/interval selector for the metrics query.
///
/// `interval_secs` is accepted and echoed for forward compatibility; the
/// stored history is already one sample per second, so no resampling occurs.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsQuery {
    #[serde(default = "MetricsQuery::default_timeframe")]
    pub timeframe_secs: u64,
    #[serde(default = "MetricsQuery::default_interval")]
    pub interval_secs:  u64,
}

impl MetricsQuery {
    fn default_timeframe() -> u64 {
        60
    }

    fn default_interval() -> u64 {
        1
    }
}

impl Default for MetricsQuery {
    fn default() -> Self {
        Self {
            timeframe_secs: Self::default_timeframe(),
            interval_secs:  Self::default_interval(),
        }
    }
}

/// Current value, full-history average, and trailing window of one series.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricReport {
    pub current: f64,
    pub average: f64,
    pub history: Vec<f64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub simulation_id:  SimulationId,
    pub timestamp:      DateTime<Utc>,
    #[serde(rename = "timeframeSeconds")]
    pub timeframe_secs: u64,
    #[serde(rename = "intervalSeconds")]
    pub interval_secs:  u64,
    pub vehicle_density: MetricReport,
    pub link_loss:       MetricReport,
    pub centrality:      MetricReport,
    /// The group-count series travels under this historical wire name.
    #[serde(rename = "groupFormation")]
    pub group_formation: MetricReport,
}

// ── Patches ───────────────────────────────────────────────────────────────────

/// Parameter patch; only present fields are validated and applied.
///
/// Patching `density` changes the configured parameter only — the vehicle
/// population is generated once at creation and is never regenerated.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchParams {
    #[serde(default)]
    pub density:  Option<u32>,
    #[serde(default)]
    pub scenario: Option<Scenario>,
}

/// Settings echoed back after a parameter patch.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSettings {
    pub scenario: Scenario,
    pub density:  u32,
    pub location: GeoPoint,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchOutcome {
    pub simulation_id: SimulationId,
    pub status:        Status,
    /// Names of the fields actually updated, in application order.
    pub updated:       Vec<&'static str>,
    pub current:       CurrentSettings,
}

/// Learning-configuration patch; both rates are bounded [0, 1].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPatch {
    #[serde(default)]
    pub learning_rate:    Option<f64>,
    #[serde(default)]
    pub exploration_rate: Option<f64>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPatchOutcome {
    pub updated: Vec<&'static str>,
    pub current: LearningConfig,
}

// ── Live updates ──────────────────────────────────────────────────────────────

/// One message per tick, delivered to every subscriber of a simulation.
#[derive(Copy, Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickUpdate {
    pub timestamp: DateTime<Utc>,
    pub metrics:   TickSample,
}

// ── Preset locations ──────────────────────────────────────────────────────────

/// A named starting location offered to clients.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetLocation {
    pub name: &'static str,
    #[serde(flatten)]
    pub position: GeoPoint,
    #[serde(rename = "type")]
    pub kind: Scenario,
}

/// The built-in location catalogue.
pub fn preset_locations() -> Vec<PresetLocation> {
    vec![
        PresetLocation {
            name:     "Delhi, India",
            position: GeoPoint::new(28.6139, 77.209),
            kind:     Scenario::Urban,
        },
        PresetLocation {
            name:     "Interstate 80, Nevada, USA",
            position: GeoPoint::new(40.7128, -119.0059),
            kind:     Scenario::Highway,
        },
    ]
}
