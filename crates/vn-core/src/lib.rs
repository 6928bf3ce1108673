//! `vn-core` — foundational types for the `vanet-rs` simulation engine.
//!
//! This crate is a dependency of every other `vn-*` crate.  It intentionally
//! has no `vn-*` dependencies and minimal external ones (only `rand`, `uuid`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `SimulationId`, `VehicleId`, `GroupId`, `SubscriberId`  |
//! | [`geo`]      | `GeoPoint`, haversine distance, bearing displacement    |
//! | [`scenario`] | `Scenario` enum (urban / highway / suburban)            |
//! | [`rng`]      | `SimRng` (per-simulation deterministic RNG)             |
//! | [`error`]    | `VnError`, `VnResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                           |
//! |---------|------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (vn-engine needs it) |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod scenario;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{VnError, VnResult};
pub use geo::GeoPoint;
pub use ids::{GroupId, SimulationId, SubscriberId, VehicleId};
pub use rng::SimRng;
pub use scenario::Scenario;
