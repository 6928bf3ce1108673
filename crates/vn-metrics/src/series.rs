//! Bounded per-metric history buffers.

use std::collections::VecDeque;

use crate::aggregate::TickSample;

/// Maximum number of samples a metric series retains (one per tick).
pub const METRIC_HISTORY_CAP: usize = 60;

/// A named metric's current value plus a bounded, chronologically ordered
/// history.  Capacity [`METRIC_HISTORY_CAP`], oldest evicted first.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSeries {
    current: f64,
    history: VecDeque<f64>,
}

impl MetricSeries {
    /// A series starting at `initial` with an empty history.  The initial
    /// current value is a display seed only; it enters the history when the
    /// first tick pushes a real sample.
    pub fn new(initial: f64) -> Self {
        Self {
            current: initial,
            history: VecDeque::with_capacity(METRIC_HISTORY_CAP),
        }
    }

    /// Record a tick sample: update the current value and append to the
    /// history, evicting the oldest entry when full.
    pub fn push(&mut self, value: f64) {
        if self.history.len() == METRIC_HISTORY_CAP {
            self.history.pop_front();
        }
        self.history.push_back(value);
        self.current = value;
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// The last `min(n, len)` samples in chronological order.  Read-only.
    pub fn window(&self, n: usize) -> Vec<f64> {
        let skip = self.history.len().saturating_sub(n);
        self.history.iter().skip(skip).copied().collect()
    }

    /// Arithmetic mean over the full stored history; 0 when empty.
    pub fn average(&self) -> f64 {
        if self.history.is_empty() {
            return 0.0;
        }
        self.history.iter().sum::<f64>() / self.history.len() as f64
    }
}

/// The four tracked series of one simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsBlock {
    pub vehicle_density: MetricSeries,
    pub link_loss:       MetricSeries,
    pub centrality:      MetricSeries,
    pub group_count:     MetricSeries,
}

impl MetricsBlock {
    /// Series initialised to the display seeds a fresh simulation reports
    /// before its first tick: the configured density, a nominal 0.15 link
    /// loss, a nominal 0.7 centrality, and zero groups.
    pub fn new(configured_density: u32) -> Self {
        Self {
            vehicle_density: MetricSeries::new(configured_density as f64),
            link_loss:       MetricSeries::new(0.15),
            centrality:      MetricSeries::new(0.7),
            group_count:     MetricSeries::new(0.0),
        }
    }

    /// Append one tick's aggregates to all four series.
    pub fn record(&mut self, sample: &TickSample) {
        self.vehicle_density.push(sample.vehicle_density);
        self.link_loss.push(sample.link_loss);
        self.centrality.push(sample.centrality);
        self.group_count.push(sample.group_count);
    }
}
