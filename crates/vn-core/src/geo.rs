//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Vehicles move in per-second
//! steps of roughly 1e-4 degrees, and path histories accumulate hundreds of
//! such steps; double precision keeps the accumulated error far below the
//! metre scale the link model cares about.

/// A WGS-84 geographic coordinate.
///
/// Serialized as `{lat, lng}`, the shape clients already speak.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    #[cfg_attr(feature = "serde", serde(rename = "lng"))]
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy is more than sufficient for contact detection at city scale;
    /// use Vincenty if sub-metre fidelity is ever required.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Displace this point by `magnitude_deg` degrees along `bearing_deg`.
    ///
    /// Planar approximation: latitude moves by the cosine component and
    /// longitude by the sine component, both in degrees.  Valid for the
    /// sub-degree steps the mobility model takes each tick.
    #[inline]
    pub fn step(self, bearing_deg: f64, magnitude_deg: f64) -> GeoPoint {
        let bearing = bearing_deg.to_radians();
        GeoPoint {
            lat: self.lat + magnitude_deg * bearing.cos(),
            lon: self.lon + magnitude_deg * bearing.sin(),
        }
    }

    /// Approximate bounding-box check — much cheaper than `distance_m` for
    /// quick rejection, and the exact form of the spawn-offset bound.
    #[inline]
    pub fn within_bbox(self, center: GeoPoint, half_deg: f64) -> bool {
        (self.lat - center.lat).abs() <= half_deg
            && (self.lon - center.lon).abs() <= half_deg
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
