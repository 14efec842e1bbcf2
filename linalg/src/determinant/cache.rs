//! Memoization store for determinants, keyed by the row-major contents of a square matrix.

use crate::errors::LinalgError;
use crate::scalar::Scalar;

use log::trace;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Limits applied by a [`DeterminantCache`]. `None` means unbounded.
///
/// Deserialization goes through [`DeterminantConfig::try_with`].
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDeterminantConfig")]
pub struct DeterminantConfig {
    /// Largest matrix order a determinant may be requested for.
    pub max_order: Option<usize>,
    /// Maximum number of cached entries. When full, new results are not stored.
    pub capacity: Option<usize>,
}

impl DeterminantConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns `LinalgError::InvalidConfig` if either limit is zero.
    pub fn try_with(
        max_order: Option<usize>,
        capacity: Option<usize>,
    ) -> Result<Self, LinalgError> {
        if max_order == Some(0) {
            return Err(LinalgError::InvalidConfig(
                "max_order must be > 0".to_string(),
            ));
        }
        if capacity == Some(0) {
            return Err(LinalgError::InvalidConfig(
                "capacity must be > 0".to_string(),
            ));
        }

        Ok(Self {
            max_order,
            capacity,
        })
    }
}

#[derive(Deserialize)]
struct RawDeterminantConfig {
    max_order: Option<usize>,
    capacity: Option<usize>,
}

impl TryFrom<RawDeterminantConfig> for DeterminantConfig {
    type Error = LinalgError;

    fn try_from(raw: RawDeterminantConfig) -> Result<Self, Self::Error> {
        Self::try_with(raw.max_order, raw.capacity)
    }
}

/// Counters observed on a [`DeterminantCache`].
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Thread-safe determinant memo.
///
/// The lock is only held for lookups and inserts. Two callers computing the same key concurrently
/// both compute it and the last insert wins, which is harmless since the value is deterministic.
#[derive(Debug)]
pub struct DeterminantCache<T> {
    config: DeterminantConfig,
    entries: Mutex<HashMap<Vec<T>, T>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Scalar> DeterminantCache<T> {
    /// An unbounded cache.
    pub fn new() -> Self {
        Self::with_config(DeterminantConfig::default())
    }

    pub fn with_config(config: DeterminantConfig) -> Self {
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> DeterminantConfig {
        self.config
    }

    /// Looks up a determinant by flattened matrix contents, counting the hit or miss.
    pub fn get(&self, key: &[T]) -> Option<T> {
        let found = self.entries().get(key).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Stores a determinant. Existing keys are overwritten; new keys are dropped once the
    /// configured capacity is reached.
    pub fn insert(&self, key: Vec<T>, value: T) {
        let mut entries = self.entries();
        if let Some(capacity) = self.config.capacity {
            if entries.len() >= capacity && !entries.contains_key(&key) {
                trace!("determinant cache full ({} entries), not storing", capacity);
                return;
            }
        }
        entries.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&self) {
        self.entries().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Vec<T>, T>> {
        // Entries are plain values, a panicked holder cannot leave them half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Scalar> Default for DeterminantCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
