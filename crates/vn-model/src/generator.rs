//! Initial population generation.

use vn_core::{GeoPoint, SimRng, VehicleId};

use crate::vehicle::{PathHistory, Vehicle};

/// Half-width of the uniform spawn offset around the origin, in degrees
/// per axis.
pub const SPAWN_OFFSET_DEG: f64 = 0.005;

/// Produce `count` vehicles scattered around `origin`.
///
/// Each vehicle is placed within ±[`SPAWN_OFFSET_DEG`] of the origin on both
/// axes, with speed uniform in [20, 80) km/h, bearing uniform in [0, 360)
/// degrees, link-loss uniform in [0, 0.2), and centrality / density weight
/// uniform in [0.5, 1.0).  Path histories start empty — the spawn position is
/// not a path entry; the first entry is written by the first tick.
pub fn generate_population(count: u32, origin: GeoPoint, rng: &mut SimRng) -> Vec<Vehicle> {
    (0..count)
        .map(|_| Vehicle {
            id:             VehicleId::generate(),
            position:       GeoPoint::new(
                origin.lat + rng.gen_range(-SPAWN_OFFSET_DEG..SPAWN_OFFSET_DEG),
                origin.lon + rng.gen_range(-SPAWN_OFFSET_DEG..SPAWN_OFFSET_DEG),
            ),
            speed_kmh:      rng.gen_range(20..80u32),
            direction_deg:  rng.gen_range(0..360u16),
            group:          None,
            link_loss:      rng.gen_range(0.0..0.2),
            centrality:     rng.gen_range(0.5..1.0),
            density_weight: rng.gen_range(0.5..1.0),
            path:           PathHistory::new(),
        })
        .collect()
}
