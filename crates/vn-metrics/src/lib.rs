//! `vn-metrics` — network-quality metrics for `vanet-rs`.
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`series`]    | `MetricSeries` (bounded history), `MetricsBlock`       |
//! | [`link`]      | pairwise link quality, connection range                |
//! | [`aggregate`] | `TickSample` — the per-tick simulation-wide aggregates |
//!
//! # Two quantities named "vehicle density"
//!
//! The *configured* density parameter (creation/patch, bounded [5, 50]) and
//! the *sampled* vehicle-density metric (the live vehicle count recorded each
//! tick) are different quantities that happen to share a name on the wire.
//! This crate only deals in the latter; the distinction is preserved on
//! purpose — do not unify them.

pub mod aggregate;
pub mod link;
pub mod series;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aggregate::TickSample;
pub use link::{link_quality, LINK_RANGE_M};
pub use series::{MetricSeries, MetricsBlock, METRIC_HISTORY_CAP};
