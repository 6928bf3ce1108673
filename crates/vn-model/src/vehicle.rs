//! Per-vehicle state and the per-tick motion step.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use vn_core::{GeoPoint, GroupId, VehicleId};

/// Maximum number of timestamped positions a vehicle retains.
pub const PATH_HISTORY_CAP: usize = 100;

/// Approximate metres per degree of latitude; converts a km/h speed figure
/// into the degrees-per-second displacement the motion model uses.
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// One entry in a vehicle's path history.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub position:  GeoPoint,
    pub timestamp: DateTime<Utc>,
}

/// A bounded, chronologically ordered trace of past positions.
///
/// Capacity [`PATH_HISTORY_CAP`]; the oldest entry is evicted on overflow.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PathHistory {
    points: VecDeque<PathPoint>,
}

impl PathHistory {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(PATH_HISTORY_CAP),
        }
    }

    /// Append a point, evicting the oldest entry when full.
    pub fn push(&mut self, point: PathPoint) {
        if self.points.len() == PATH_HISTORY_CAP {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest-first iteration over the stored points.
    pub fn iter(&self) -> impl Iterator<Item = &PathPoint> {
        self.points.iter()
    }
}

/// One simulated vehicle.
///
/// Created once by the population generator and mutated every tick by
/// [`advance`][Vehicle::advance]; vehicles are never destroyed individually.
/// The link-loss / centrality / density-weight samples are drawn once at
/// creation and only ever *aggregated* per tick, never re-sampled.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub id:             VehicleId,
    pub position:       GeoPoint,
    /// Speed in km/h, fixed at creation.  Range [20, 80).
    pub speed_kmh:      u32,
    /// Bearing in degrees, fixed at creation.  Range [0, 360).
    pub direction_deg:  u16,
    /// Group membership — always `None` in this engine (no group formation).
    pub group:          Option<GroupId>,
    /// Instantaneous link-loss sample in [0, 0.2).
    pub link_loss:      f64,
    /// Instantaneous centrality sample in [0.5, 1.0).
    pub centrality:     f64,
    /// Local density weight in [0.5, 1.0).
    pub density_weight: f64,
    pub path:           PathHistory,
}

impl Vehicle {
    /// Advance one tick (1 simulated second) along the fixed bearing.
    ///
    /// The angular displacement is `speed_kmh / 111 000` degrees per second.
    /// The new position is appended to the path history with timestamp `now`.
    pub fn advance(&mut self, now: DateTime<Utc>) {
        let step_deg = self.speed_kmh as f64 / METERS_PER_DEGREE;
        self.position = self.position.step(self.direction_deg as f64, step_deg);
        self.path.push(PathPoint {
            position:  self.position,
            timestamp: now,
        });
    }
}
