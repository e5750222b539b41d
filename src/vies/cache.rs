//! Short-lived cache of VIES answers.
//!
//! Only successful lookups are stored, for valid and invalid numbers alike.
//! Transport errors are never cached, so an outage does not outlive itself.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::core::{ViesError, ViesLookup, ViesTransport};

type Key = (String, String);

#[derive(Debug)]
struct Entry {
    lookup: ViesLookup,
    stored_at: Instant,
}

/// TTL cache in front of a [`ViesTransport`], keyed by `(country_code, number)`.
///
/// When full, expired entries are dropped first, then the oldest entry.
/// A zero TTL or zero capacity disables caching entirely.
#[derive(Debug)]
pub struct CachedTransport<T> {
    inner: T,
    ttl: Duration,
    capacity: usize,
    entries: Mutex<HashMap<Key, Entry>>,
}

impl<T> CachedTransport<T> {
    pub fn new(inner: T, ttl: Duration, capacity: usize) -> Self {
        Self {
            inner,
            ttl,
            capacity,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn enabled(&self) -> bool {
        !self.ttl.is_zero() && self.capacity > 0
    }

    fn get(&self, key: &Key) -> Option<ViesLookup> {
        let mut entries = self.entries.lock();
        let fresh = entries.get(key)?.stored_at.elapsed() < self.ttl;
        if fresh {
            entries.get(key).map(|e| e.lookup.clone())
        } else {
            entries.remove(key);
            None
        }
    }

    fn insert(&self, key: Key, lookup: ViesLookup) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity && !entries.contains_key(&key) {
            let ttl = self.ttl;
            entries.retain(|_, e| e.stored_at.elapsed() < ttl);
            if entries.len() >= self.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, e)| e.stored_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }
        entries.insert(
            key,
            Entry {
                lookup,
                stored_at: Instant::now(),
            },
        );
    }
}

impl<T: ViesTransport> ViesTransport for CachedTransport<T> {
    async fn lookup(&self, country_code: &str, number: &str) -> Result<ViesLookup, ViesError> {
        if !self.enabled() {
            return self.inner.lookup(country_code, number).await;
        }

        let key = (country_code.to_string(), number.to_string());
        if let Some(hit) = self.get(&key) {
            tracing::debug!(country_code, "VIES cache hit");
            return Ok(hit);
        }

        let lookup = self.inner.lookup(country_code, number).await?;
        self.insert(key, lookup.clone());
        Ok(lookup)
    }
}
