//! Vehicle group record.
//!
//! Group *formation* is outside this engine's scope: no code here or in
//! vn-engine ever creates a `Group`.  The container and its query surface
//! exist so the external interface can report a (possibly empty) group list
//! with stable field shapes.

use chrono::{DateTime, Utc};
use vn_core::{GeoPoint, GroupId, VehicleId};

/// A cluster of cooperating vehicles.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub id:        GroupId,
    pub members:   Vec<VehicleId>,
    pub centroid:  GeoPoint,
    pub leader:    VehicleId,
    pub formed_at: DateTime<Utc>,
    /// Stability score in [0, 1].
    pub stability: f64,
}
