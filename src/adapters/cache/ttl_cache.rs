//! In-memory TTL cache for derived statistics.
//!
//! Read-heavy rollups (user progress, module progress) are expensive to
//! recompute, so their serialized results are cached under string keys with
//! a caller-supplied time-to-live. Invalidation is blunt: any progress write
//! clears the whole cache, trading precision for simplicity.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::ports::Clock;

/// One cached value, the instant it was computed, and its lifetime.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: JsonValue,
    computed_at: u64,
    ttl_secs: u64,
}

/// In-memory statistics cache with TTL expiry and single-flight computes.
///
/// Values are stored as JSON so one cache serves every rollup shape. Each
/// key has its own in-flight lock: when several readers miss on the same
/// key at once, one computes while the rest wait and reuse the result.
///
/// Cache failures never fail a read. A value that no longer deserializes
/// is treated as a miss and recomputed; a value that fails to serialize is
/// simply not stored.
pub struct StatisticsCache {
    clock: Arc<dyn Clock>,
    entries: RwLock<HashMap<String, CacheEntry>>,
    flights: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl StatisticsCache {
    /// Creates an empty cache.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            entries: RwLock::new(HashMap::new()),
            flights: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached value for `key`, or computes and stores it with
    /// the given lifetime.
    ///
    /// A fresh entry is returned without invoking `compute`. On a miss the
    /// caller holds the key's flight lock while computing, so concurrent
    /// misses on the same key run `compute` once. Computation errors are
    /// returned to the caller and nothing is cached for the key.
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        key: &str,
        ttl_secs: u64,
        compute: F,
    ) -> Result<T, DomainError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, DomainError>>,
    {
        if let Some(value) = self.get_fresh::<T>(key).await {
            debug!(key, "cache hit");
            return Ok(value);
        }

        let flight = self.flight_lock(key).await;
        let guard = flight.lock().await;

        // Another caller may have filled the key while we waited.
        let result = if let Some(value) = self.get_fresh::<T>(key).await {
            debug!(key, "cache hit after wait");
            Ok(value)
        } else {
            debug!(key, "cache miss, computing");
            match compute().await {
                Ok(value) => {
                    self.store(key, ttl_secs, &value).await;
                    Ok(value)
                }
                Err(error) => Err(error),
            }
        };

        drop(guard);
        drop(flight);
        self.release_flight(key).await;
        result
    }

    /// Removes every cached entry.
    ///
    /// Called after any progress write; per-key invalidation is not worth
    /// tracking which rollups a given record feeds into.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        self.flights.lock().await.clear();
        debug!("statistics cache cleared");
    }

    /// Returns the number of cached entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn get_fresh<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;

        let now = self.clock.now().as_unix_secs();
        if now.saturating_sub(entry.computed_at) >= entry.ttl_secs {
            return None;
        }

        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(key, %error, "cached value no longer deserializes, treating as miss");
                None
            }
        }
    }

    async fn store<T: Serialize>(&self, key: &str, ttl_secs: u64, value: &T) {
        let json = match serde_json::to_value(value) {
            Ok(json) => json,
            Err(error) => {
                warn!(key, %error, "failed to serialize value for cache, skipping store");
                return;
            }
        };

        let entry = CacheEntry {
            value: json,
            computed_at: self.clock.now().as_unix_secs(),
            ttl_secs,
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }

    async fn flight_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut flights = self.flights.lock().await;
        Arc::clone(flights.entry(key.to_string()).or_default())
    }

    /// Drops the key's flight lock once no caller still references it, so
    /// the flight map does not grow with every key ever computed.
    async fn release_flight(&self, key: &str) {
        let mut flights = self.flights.lock().await;
        if let Some(lock) = flights.get(key) {
            if Arc::strong_count(lock) == 1 {
                flights.remove(key);
            }
        }
    }

    #[cfg(test)]
    async fn flight_count(&self) -> usize {
        self.flights.lock().await.len()
    }
}
