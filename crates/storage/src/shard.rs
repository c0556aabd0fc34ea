//! Single-scope key/value map
//!
//! A [`Shard`] holds the bindings of exactly one scope: one request, or one
//! session inside the registry. FxHashMap gives O(1) lookups with a fast
//! non-crypto hash; keys are variable names chosen by application code, not
//! by untrusted clients.

use rustc_hash::FxHashMap;
use scopestore_core::Value;

/// Bindings of one scope
#[derive(Debug, Clone, Default)]
pub struct Shard {
    data: FxHashMap<String, Value>,
}

impl Shard {
    /// Create a new empty shard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shard with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Check if a key is bound
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Get the value bound to a key
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Bind a value, returning the previous one
    #[inline]
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.data.insert(key, value)
    }

    /// Unbind a key, returning its value
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Get number of entries in this shard
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if shard is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// All bound keys, unordered
    pub fn keys(&self) -> Vec<String> {
        self.data.keys().cloned().collect()
    }
}
