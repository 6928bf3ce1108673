//! Strongly typed identifier wrappers.
//!
//! Simulation, vehicle and group identifiers are opaque strings on the wire
//! (`sim_6f3a…`, `v_a1b2c3`); the newtypes keep them from being mixed up at
//! compile time while still hashing and comparing like plain strings.
//! Subscriber handles are process-local and use a cheap integer instead.

use std::fmt;

/// Generate a typed ID wrapper around an owned string.
macro_rules! string_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident; prefix = $prefix:literal, hex = $hex:literal;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        $vis struct $name(String);

        impl $name {
            /// Wrap an existing identifier (e.g. one parsed from a request).
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Allocate a fresh identifier: the domain prefix plus the first
            /// hex digits of a v4 UUID.
            pub fn generate() -> Self {
                let hex = uuid::Uuid::new_v4().simple().to_string();
                Self(format!(concat!($prefix, "{}"), &hex[..$hex]))
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_owned())
            }
        }
    };
}

string_id! {
    /// Registry key for one simulation record.
    pub struct SimulationId; prefix = "sim_", hex = 10;
}

string_id! {
    /// Identifier of a vehicle, unique within its simulation.
    pub struct VehicleId; prefix = "v_", hex = 6;
}

string_id! {
    /// Identifier of a vehicle group (reserved — no group logic populates it).
    pub struct GroupId; prefix = "grp_", hex = 6;
}

/// Process-local handle for one live-update subscriber.
///
/// Allocated by the broadcast hub from a monotonic counter; never leaves the
/// process, so no string representation is needed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubscriberId(pub u64);

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriberId({})", self.0)
    }
}
