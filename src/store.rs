//! The guarded store shared by every scope.
//!
//! [`GuardedStore`] wraps any [`Backing`] and enforces the store contract on
//! top of it: no silent overwrites, no silent defaults for missing keys.
//! Request and session stores are the same type with different backings.

use scopestore_core::{Backing, Store, StoreError, StoreResult, Value};

/// Guarded key/value access over a backing map.
///
/// # Example
///
/// ```ignore
/// use scopestore::prelude::*;
///
/// let mut store = RequestStore::new();
/// store.put_new("user_id", Value::Int(42))?;
/// assert!(store.put_new("user_id", Value::Int(7)).is_err());
/// store.put("user_id", Value::Int(7), true)?;
/// ```
#[derive(Debug, Clone)]
pub struct GuardedStore<B> {
    backing: B,
}

impl<B: Backing> GuardedStore<B> {
    /// Wrap a backing map.
    pub fn from_backing(backing: B) -> Self {
        Self { backing }
    }

    /// The backing map this store guards.
    pub fn backing(&self) -> &B {
        &self.backing
    }

    /// Unwrap into the backing map.
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Number of bindings visible through this store.
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Check if no bindings are visible through this store.
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// All bound keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.backing.keys()
    }
}

impl<B: Backing> Store for GuardedStore<B> {
    fn has(&self, key: &str) -> bool {
        self.backing.contains(key)
    }

    fn put(&mut self, key: &str, value: Value, overwrite: bool) -> StoreResult<()> {
        if self.has(key) && !overwrite {
            return Err(StoreError::duplicate_key(key));
        }
        self.backing.insert(key.to_string(), value)
    }

    fn get(&self, key: &str) -> StoreResult<Value> {
        self.backing
            .fetch(key)
            .ok_or_else(|| StoreError::missing_key(key))
    }

    fn remove(&mut self, key: &str) -> StoreResult<bool> {
        if !self.has(key) {
            return Err(StoreError::missing_key(key));
        }
        self.backing.delete(key);
        Ok(!self.has(key))
    }
}
