//! Request coalescing for concurrent lookups of the same key.
//!
//! A caller claims the keys it is about to fetch. Keys nobody is fetching become owned by the
//! caller's [`Flight`]; keys already being fetched hand back a [`Landing`] to await. When the
//! flight is dropped, whether the fetch finished, failed or was cancelled, its keys are
//! released and everyone awaiting them wakes up to read the result from the cache.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard};

use tokio::sync::watch;

/// Registry of keys currently being fetched.
#[derive(Debug)]
pub struct InFlight<K> {
    pending: Mutex<HashMap<K, watch::Receiver<()>>>,
}

/// Keys owned by one caller, released on drop.
#[derive(Debug)]
pub struct Flight<'a, K: Hash + Eq> {
    registry: &'a InFlight<K>,
    keys: Vec<K>,
    // Never sent on: dropping it is the signal.
    _landed: watch::Sender<()>,
}

/// Handle to await another caller's flight.
#[derive(Debug)]
pub struct Landing(watch::Receiver<()>);

impl<K> Default for InFlight<K> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(HashMap::new()),
        }
    }
}

impl<K> InFlight<K>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims every key not already in flight.
    ///
    /// Returns the caller's flight holding the claimed keys, and one landing per distinct
    /// flight that already owns some of the other keys.
    pub fn claim<I>(&self, keys: I) -> (Flight<'_, K>, Vec<Landing>)
    where
        I: IntoIterator<Item = K>,
    {
        let (landed, receiver) = watch::channel(());
        let mut owned = Vec::new();
        let mut landings: Vec<Landing> = Vec::new();

        let mut pending = self.lock();
        for key in keys {
            match pending.get(&key) {
                // Duplicate of a key this call already claimed
                Some(in_flight) if in_flight.same_channel(&receiver) => {}
                Some(in_flight) => {
                    if !landings.iter().any(|l| l.0.same_channel(in_flight)) {
                        landings.push(Landing(in_flight.clone()));
                    }
                }
                None => {
                    pending.insert(key.clone(), receiver.clone());
                    owned.push(key);
                }
            }
        }
        drop(pending);

        let flight = Flight {
            registry: self,
            keys: owned,
            _landed: landed,
        };

        (flight, landings)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, watch::Receiver<()>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K: Hash + Eq> Flight<'_, K> {
    /// Keys this flight owns and must fetch.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }
}

impl<K: Hash + Eq> Drop for Flight<'_, K> {
    fn drop(&mut self) {
        let mut pending = self
            .registry
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for key in &self.keys {
            pending.remove(key);
        }
    }
}

impl Landing {
    /// Waits until the owning flight is dropped.
    pub async fn wait(mut self) {
        // Only ever errors, once the sender is gone.
        let _ = self.0.changed().await;
    }
}
