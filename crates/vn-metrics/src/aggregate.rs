//! Simulation-wide aggregate tick samples.

use vn_model::Vehicle;

/// The four aggregates derived once per tick.
///
/// `vehicle_density` is the *live vehicle count*, not the configured density
/// parameter — two distinct quantities that share a wire name (see the crate
/// docs).  `link_loss` and `centrality` average the vehicles' stored static
/// samples; nothing is re-sampled here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TickSample {
    pub vehicle_density: f64,
    pub link_loss:       f64,
    pub centrality:      f64,
    pub group_count:     f64,
}

impl TickSample {
    /// Aggregate the current population.  Averages over an empty population
    /// are defined as 0.
    pub fn collect(vehicles: &[Vehicle], group_count: usize) -> Self {
        Self {
            vehicle_density: vehicles.len() as f64,
            link_loss:       mean(vehicles.iter().map(|v| v.link_loss)),
            centrality:      mean(vehicles.iter().map(|v| v.centrality)),
            group_count:     group_count as f64,
        }
    }
}

/// Arithmetic mean; 0 for an empty sequence.
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}
