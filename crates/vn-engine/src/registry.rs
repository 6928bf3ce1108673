//! The identifier → record map.
//!
//! The registry is the single owner of simulation records.  Its lock guards
//! only the map itself (create / lookup / remove / list); per-record state
//! has its own lock inside [`SimCell`], so operations on different
//! simulations never serialize against each other here beyond the map
//! access.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use vn_core::{SimulationId, VnError, VnResult};

use crate::sim::SimCell;

#[derive(Default)]
pub struct Registry {
    sims: Mutex<FxHashMap<SimulationId, Arc<SimCell>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, cell: Arc<SimCell>) {
        self.map().insert(cell.id.clone(), cell);
    }

    /// Borrow a record for one operation.  Fails with `SimulationNotFound`
    /// for unknown identifiers.
    pub fn get(&self, id: &SimulationId) -> VnResult<Arc<SimCell>> {
        self.map()
            .get(id)
            .cloned()
            .ok_or_else(|| VnError::SimulationNotFound(id.clone()))
    }

    /// Drop a record from the registry, returning it for teardown.
    pub fn remove(&self, id: &SimulationId) -> Option<Arc<SimCell>> {
        self.map().remove(id)
    }

    /// Identifiers of every registered simulation (running or stopped).
    pub fn ids(&self) -> Vec<SimulationId> {
        self.map().keys().cloned().collect()
    }

    /// All registered records — used by engine shutdown.
    pub fn cells(&self) -> Vec<Arc<SimCell>> {
        self.map().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.map().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map().is_empty()
    }

    fn map(&self) -> std::sync::MutexGuard<'_, FxHashMap<SimulationId, Arc<SimCell>>> {
        self.sims.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
