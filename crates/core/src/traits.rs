//! Store contract and backing-map seam
//!
//! [`Store`] is the four-operation contract every scope exposes to callers.
//! [`Backing`] is the mapping facility a store delegates to; each scope
//! (request, session) supplies its own implementation.

use crate::error::StoreResult;
use crate::value::Value;

/// A mutable `String -> Value` mapping that a store guards
///
/// Implementations are thin: no duplicate or existence checks happen here.
/// The guard logic lives in the store that wraps the backing.
pub trait Backing {
    /// Check if a binding exists for `key`
    fn contains(&self, key: &str) -> bool;

    /// Get a copy of the value bound to `key`
    fn fetch(&self, key: &str) -> Option<Value>;

    /// Bind `value` to `key`, replacing any existing binding
    ///
    /// Fails only when the backing facility itself is unusable (for example
    /// a session that has already ended).
    fn insert(&mut self, key: String, value: Value) -> StoreResult<()>;

    /// Drop the binding for `key`, returning the removed value
    fn delete(&mut self, key: &str) -> Option<Value>;

    /// Number of bindings currently held
    fn len(&self) -> usize;

    /// Check if no bindings are held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All bound keys, in no particular order
    fn keys(&self) -> Vec<String>;
}

/// Guarded key/value access over one scope
///
/// ## Contract
///
/// | Operation | Absent key | Present key |
/// |-----------|------------|-------------|
/// | `has` | `false` | `true` |
/// | `put(overwrite = false)` | binds | `DuplicateKey`, no mutation |
/// | `put(overwrite = true)` | binds | replaces |
/// | `get` | `MissingKey` | stored value |
/// | `remove` | `MissingKey` | unbinds, returns `!has(key)` |
pub trait Store {
    /// Check whether a binding exists for `key`. Never fails.
    fn has(&self, key: &str) -> bool;

    /// Bind `value` to `key`
    ///
    /// Without `overwrite`, an existing binding is an error and is left
    /// untouched.
    fn put(&mut self, key: &str, value: Value, overwrite: bool) -> StoreResult<()>;

    /// Bind `value` to a key that must not be bound yet
    ///
    /// Shorthand for `put(key, value, false)`.
    fn put_new(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.put(key, value, false)
    }

    /// Get the value bound to `key`
    fn get(&self, key: &str) -> StoreResult<Value>;

    /// Remove the binding for `key`
    ///
    /// Returns whether the key is absent afterwards.
    fn remove(&mut self, key: &str) -> StoreResult<bool>;
}
