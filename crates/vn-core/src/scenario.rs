//! Traffic scenario enum shared across all simulation crates.
//!
//! The scenario is a creation/patch parameter that is stored and reported but
//! does not alter the motion model in this engine; all variants are always
//! compiled in.

use std::str::FromStr;

use crate::VnError;

/// The traffic environment a simulation models.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scenario {
    Urban,
    Highway,
    Suburban,
}

impl Scenario {
    /// Human-readable label, identical to the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::Urban    => "urban",
            Scenario::Highway  => "highway",
            Scenario::Suburban => "suburban",
        }
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = VnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "urban"    => Ok(Scenario::Urban),
            "highway"  => Ok(Scenario::Highway),
            "suburban" => Ok(Scenario::Suburban),
            other => Err(VnError::invalid(
                "scenario",
                format!("must be one of: urban, highway, suburban (got {other:?})"),
            )),
        }
    }
}
