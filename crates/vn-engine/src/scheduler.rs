//! The per-simulation tick thread.
//!
//! Exactly one loop exists per running simulation, on its own named thread.
//! Each fire acquires the record lock, applies the tick, releases the lock,
//! and only then publishes to the hub — the broadcast can never extend the
//! critical section.  Cancellation is cooperative: `stop()` flips the status
//! flag under the lock and unparks the thread, which observes the flip and
//! exits without further mutation.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::hub::BroadcastHub;
use crate::sim::SimCell;

/// Spawn the tick loop for `cell`, firing every `period`.
pub(crate) fn spawn_ticker(
    cell: Arc<SimCell>,
    hub: Arc<BroadcastHub>,
    period: Duration,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name(format!("vn-tick-{}", cell.id))
        .spawn(move || run_ticker(cell, hub, period))
        .expect("failed to spawn tick thread")
}

fn run_ticker(cell: Arc<SimCell>, hub: Arc<BroadcastHub>, period: Duration) {
    log::debug!("tick loop for {} started ({period:?} period)", cell.id);
    let mut next_fire = Instant::now() + period;

    'run: loop {
        // Sleep until the next scheduled fire.  stop() unparks us early so
        // the status flip is observed within one wake-up, not one period.
        loop {
            let now = Instant::now();
            if now >= next_fire {
                break;
            }
            thread::park_timeout(next_fire - now);
            if cell.lock_state().status != crate::sim::Status::Running {
                break 'run;
            }
        }

        let tick_start = Instant::now();
        let update = {
            let now = Utc::now();
            let mut state = cell.lock_state();
            // apply_tick re-checks the status under the lock; a stop that
            // raced the wake-up yields None and ends the loop untouched.
            state
                .apply_tick(now)
                .map(|metrics| crate::api::TickUpdate { timestamp: now, metrics })
        };

        match update {
            Some(update) => {
                hub.publish(&cell.id, &update);
            }
            None => break 'run,
        }

        next_fire = tick_start + period;
    }

    log::debug!("tick loop for {} exited", cell.id);
}
