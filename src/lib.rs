//! # scopestore
//!
//! Scope-bound key/value stores for request handling.
//!
//! Two stores share one guarded contract (`has`, `put`, `get`, `remove`):
//!
//! - [`RequestStore`] - bindings private to one request, dropped with it
//! - [`SessionStore`] - bindings of one user session, shared by all of that
//!   session's requests through a [`SessionRegistry`]
//!
//! Both are [`GuardedStore`] over a different backing map, and both
//! implement [`Store`], so handling code can be written once for either
//! scope.
//!
//! ## Quick Start
//!
//! ```ignore
//! use scopestore::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(SessionRegistry::new());
//! let session = registry.open_session();
//!
//! let mut ctx = RequestContext::with_session(&registry, session)?;
//! ctx.store_mut().put_new("user_id", Value::Int(42))?;
//! ctx.session_mut().unwrap().put_new("cart", Value::from(json!(["item1"])))?;
//!
//! // Accidental overwrite is an error, not a silent replace
//! assert!(ctx.store_mut().put_new("user_id", Value::Int(7)).is_err());
//!
//! ctx.finish();
//! ```

#![warn(missing_docs)]

mod config;
mod request;
mod session;
mod store;

pub mod prelude;

pub use config::StoreOptions;
pub use request::{RequestContext, RequestStore};
pub use session::SessionStore;
pub use store::GuardedStore;

// Re-export the contract and backing types
pub use scopestore_core::{
    Backing, RequestId, SessionId, Store, StoreError, StoreResult, Value,
};
pub use scopestore_storage::{RequestMap, SessionMap, SessionRegistry};
