//! Best-effort fan-out of tick updates to live subscribers.
//!
//! Each simulation has a topic; each subscriber gets a bounded channel.
//! Publishing uses `try_send` only: a subscriber whose queue is full is
//! skipped for that tick, and one whose receiver was dropped is evicted.
//! Neither case can block the tick loop or affect other subscribers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use rustc_hash::FxHashMap;
use vn_core::{SimulationId, SubscriberId, VnError, VnResult};

use crate::api::TickUpdate;

/// Per-subscriber queue depth.  One update per second means a consumer this
/// far behind is effectively gone; skipping keeps delivery non-blocking.
pub const SUBSCRIBER_QUEUE_CAP: usize = 32;

struct SubscriberSlot {
    id: SubscriberId,
    tx: Sender<TickUpdate>,
}

/// A live subscription to one simulation's tick updates.
///
/// Dropping it disconnects the channel; the hub evicts the slot on the next
/// publish, so explicit unsubscription on disconnect is automatic.
pub struct Subscription {
    pub id:         SubscriberId,
    pub simulation: SimulationId,
    rx:             Receiver<TickUpdate>,
}

impl Subscription {
    /// Next update, waiting up to `timeout`.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<TickUpdate, crossbeam_channel::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Next update if one is already queued.
    pub fn try_recv(&self) -> Result<TickUpdate, crossbeam_channel::TryRecvError> {
        self.rx.try_recv()
    }
}

#[derive(Default)]
pub struct BroadcastHub {
    topics:          Mutex<FxHashMap<SimulationId, Vec<SubscriberSlot>>>,
    next_subscriber: AtomicU64,
}

impl BroadcastHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a topic for a newly created simulation.
    pub fn register(&self, id: &SimulationId) {
        self.lock().entry(id.clone()).or_default();
    }

    /// Attach a subscriber to a simulation's topic.
    ///
    /// Unknown identifiers are rejected with `SimulationNotFound` so the
    /// transport can close the connection with a descriptive reason rather
    /// than dropping it silently.
    pub fn subscribe(&self, id: &SimulationId) -> VnResult<Subscription> {
        let mut topics = self.lock();
        let slots = topics
            .get_mut(id)
            .ok_or_else(|| VnError::SimulationNotFound(id.clone()))?;

        let sub_id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = crossbeam_channel::bounded(SUBSCRIBER_QUEUE_CAP);
        slots.push(SubscriberSlot { id: sub_id, tx });

        log::debug!("subscriber {sub_id} attached to {id}");
        Ok(Subscription {
            id:         sub_id,
            simulation: id.clone(),
            rx,
        })
    }

    /// Detach a subscriber explicitly.  Disconnected subscribers are also
    /// evicted lazily by `publish`, so calling this is optional.
    pub fn unsubscribe(&self, id: &SimulationId, subscriber: SubscriberId) {
        if let Some(slots) = self.lock().get_mut(id) {
            slots.retain(|s| s.id != subscriber);
        }
    }

    /// Deliver `update` to every current subscriber of `id`, best-effort.
    ///
    /// Returns the number of subscribers actually delivered to.
    pub fn publish(&self, id: &SimulationId, update: &TickUpdate) -> usize {
        let mut topics = self.lock();
        let Some(slots) = topics.get_mut(id) else {
            return 0;
        };

        let mut delivered = 0;
        slots.retain(|slot| match slot.tx.try_send(*update) {
            Ok(()) => {
                delivered += 1;
                true
            }
            // Queue full: the consumer is behind; skip this tick, keep them.
            Err(TrySendError::Full(_)) => true,
            // Receiver dropped: the subscriber disconnected.
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("subscriber {} of {id} disconnected, evicting", slot.id);
                false
            }
        });
        delivered
    }

    /// Tear down a topic.  All senders are dropped, so every remaining
    /// subscriber observes a channel disconnect.
    pub fn close(&self, id: &SimulationId) {
        self.lock().remove(id);
    }

    pub fn subscriber_count(&self, id: &SimulationId) -> usize {
        self.lock().get(id).map_or(0, Vec::len)
    }

    fn lock(
        &self,
    ) -> std::sync::MutexGuard<'_, FxHashMap<SimulationId, Vec<SubscriberSlot>>> {
        self.topics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
