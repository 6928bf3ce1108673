//! Engine error type.
//!
//! Every fallible operation across the `vn-*` crates reports one of these
//! variants synchronously to its caller; nothing is silently swallowed.
//! Validation errors always name the offending field and, where the value is
//! bounded, the allowed range or set.

use thiserror::Error;

use crate::{SimulationId, VehicleId};

/// The top-level error type for all `vn-*` crates.
#[derive(Debug, Error)]
pub enum VnError {
    /// A request parameter failed validation.  `reason` spells out the
    /// allowed range or set so the message is self-contained.
    #[error("invalid {field}: {reason}")]
    InvalidParameter {
        field:  &'static str,
        reason: String,
    },

    #[error("simulation {0} not found")]
    SimulationNotFound(SimulationId),

    #[error("vehicle {0} not found")]
    VehicleNotFound(VehicleId),

    /// The operation requires a running simulation but the record is stopped.
    /// Stop is terminal; there is no stopped → running transition.
    #[error("simulation {0} is not running")]
    NotRunning(SimulationId),

    #[error("internal error: {0}")]
    Internal(String),
}

impl VnError {
    /// Shorthand for an `InvalidParameter` with a formatted reason.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        VnError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

/// Shorthand result type for all `vn-*` crates.
pub type VnResult<T> = Result<T, VnError>;
