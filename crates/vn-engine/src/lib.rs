//! `vn-engine` — the vanet-rs simulation engine.
//!
//! Owns the set of live simulations and drives each one with an independent
//! background tick loop, while control operations (stop, patch, queries)
//! execute concurrently against the same records.
//!
//! # Architecture
//!
//! ```text
//! Caller Thread(s)            Tick Thread (per simulation)     Subscribers
//!     |                           |                                |
//!     |--create()---------------->| spawned                        |
//!     |--patch()/stop()/query()-->| lock(record)                   |
//!     |   lock(record)            |   advance vehicles             |
//!     |                           |   collect TickSample           |
//!     |                           |   append to 4 series           |
//!     |                           | unlock                         |
//!     |                           | hub.publish(update) --try_send-|-> rx
//!     |                           | park_timeout(1s - elapsed)     |
//! ```
//!
//! One mutex per simulation record is the single mutual-exclusion
//! discipline: the tick's read-modify-write and every control operation
//! acquire it, so a parameter patch can never interleave with a half-applied
//! tick.  The registry map has its own lock, touched only by create / lookup
//! / remove.  Subscriber delivery is non-blocking (`try_send`) so a slow
//! consumer can never stall a tick loop.
//!
//! # Modules
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`api`]       | Request/response types of the external interface      |
//! | [`sim`]       | `SimState`, `SimCell`, the per-tick update            |
//! | [`registry`]  | Identifier → record map (single owner of records)     |
//! | [`scheduler`] | The per-simulation tick thread                        |
//! | [`hub`]       | Best-effort fan-out of tick updates to subscribers    |
//! | [`engine`]    | `Engine` — the facade implementing every operation    |

pub mod api;
pub mod engine;
pub mod hub;
pub mod registry;
pub mod scheduler;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use api::{
    preset_locations, ConnectionInfo, CreateParams, CreateReceipt, GroupPage, GroupSummary,
    LearningPatch, LearningPatchOutcome, MetricReport, MetricsQuery, MetricsReport, PatchOutcome,
    PatchParams, PresetLocation, StatusReport, StopSummary, TickUpdate, VehicleDetail,
    VehiclePage, VehicleSummary,
};
pub use engine::{Engine, EngineConfig};
pub use hub::{BroadcastHub, Subscription, SUBSCRIBER_QUEUE_CAP};
pub use sim::Status;
