//! Pairwise link-quality model.

use vn_core::GeoPoint;

/// Radio range: link quality reaches zero at this separation.
pub const LINK_RANGE_M: f64 = 1_000.0;

/// Distance-decayed connectivity score in [0, 1].
///
/// Linear within [`LINK_RANGE_M`], zero beyond it.  Symmetric by
/// construction, and exactly 1 at zero distance.
pub fn link_quality(a: GeoPoint, b: GeoPoint) -> f64 {
    (1.0 - a.distance_m(b) / LINK_RANGE_M).max(0.0)
}
