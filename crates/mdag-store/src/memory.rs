use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use mdag_types::Digest;

use crate::error::{StoreError, StoreResult};
use crate::traits::KvStore;

/// In-memory, HashMap-based key-value store.
///
/// Intended for tests and embedding. Values are held behind a `RwLock` for
/// safe concurrent access and copied on write and read.
pub struct InMemoryKvStore {
    values: RwLock<HashMap<Digest, Vec<u8>>>,
    puts: AtomicU64,
}

impl InMemoryKvStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            puts: AtomicU64::new(0),
        }
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored values.
    pub fn total_bytes(&self) -> u64 {
        self.values
            .read()
            .expect("lock poisoned")
            .values()
            .map(|v| v.len() as u64)
            .sum()
    }

    /// Copy of the value stored under `key`, if any.
    pub fn get(&self, key: &Digest) -> Option<Vec<u8>> {
        self.values.read().expect("lock poisoned").get(key).cloned()
    }

    /// Number of `put` calls received, including ones for keys already present.
    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::Relaxed)
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<Digest> {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<Digest> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KvStore for InMemoryKvStore {
    fn exists(&self, key: &Digest) -> StoreResult<bool> {
        let map = self.values.read().expect("lock poisoned");
        Ok(map.contains_key(key))
    }

    fn put(&self, key: &Digest, value: &[u8]) -> StoreResult<()> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        self.puts.fetch_add(1, Ordering::Relaxed);
        let mut map = self.values.write().expect("lock poisoned");
        // Append-only: the first value written under a key wins.
        map.entry(key.clone()).or_insert_with(|| value.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryKvStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryKvStore")
            .field("value_count", &self.len())
            .field("put_count", &self.put_count())
            .finish()
    }
}
