//! Convenient imports for scopestore.
//!
//! ```ignore
//! use scopestore::prelude::*;
//!
//! let mut store = RequestStore::new();
//! store.put_new("key", Value::from("value"))?;
//! ```

// Stores
pub use crate::request::{RequestContext, RequestStore};
pub use crate::session::SessionStore;
pub use crate::store::GuardedStore;
pub use crate::Store;

// Session facility
pub use crate::{SessionId, SessionRegistry};

// Values and errors
pub use crate::{StoreError, StoreResult, Value};

// Configuration
pub use crate::config::StoreOptions;

// Re-export serde_json for building values
pub use serde_json::json;
