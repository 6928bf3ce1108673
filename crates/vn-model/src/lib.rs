//! `vn-model` — vehicles, groups, and the mobility model for `vanet-rs`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle`, `PathHistory`, the per-tick motion step      |
//! | [`generator`] | Initial population generation                           |
//! | [`group`]     | `Group` record (container only — never populated here)  |
//! | [`learning`]  | `LearningConfig` (stored verbatim, never consulted)     |
//!
//! # Motion model
//!
//! Vehicles follow a first-order linear motion model: a fixed speed and
//! bearing assigned at creation, advanced once per tick.  There is no
//! acceleration, no turning, and no re-sampling — this is intentional
//! simplicity, kept for behavioural compatibility with the system it models.

pub mod generator;
pub mod group;
pub mod learning;
pub mod vehicle;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use generator::{generate_population, SPAWN_OFFSET_DEG};
pub use group::Group;
pub use learning::LearningConfig;
pub use vehicle::{PathHistory, PathPoint, Vehicle, METERS_PER_DEGREE, PATH_HISTORY_CAP};
