//! Request-owned backing map
//!
//! A [`RequestMap`] is created fresh for every inbound request and dropped
//! with it. Nothing outside the owning store can reach it, so bindings never
//! leak from one request into the next.

use crate::shard::Shard;
use scopestore_core::{Backing, StoreResult, Value};

/// Private bindings of a single request
#[derive(Debug, Default)]
pub struct RequestMap {
    shard: Shard,
}

impl RequestMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map with room for `capacity` bindings
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shard: Shard::with_capacity(capacity),
        }
    }
}

impl Backing for RequestMap {
    fn contains(&self, key: &str) -> bool {
        self.shard.contains(key)
    }

    fn fetch(&self, key: &str) -> Option<Value> {
        self.shard.get(key).cloned()
    }

    fn insert(&mut self, key: String, value: Value) -> StoreResult<()> {
        self.shard.insert(key, value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.shard.remove(key)
    }

    fn len(&self) -> usize {
        self.shard.len()
    }

    fn keys(&self) -> Vec<String> {
        self.shard.keys()
    }
}
