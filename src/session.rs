//! Session-scoped store.
//!
//! A [`SessionStore`] owns nothing: every operation is forwarded to the
//! session's bindings in a shared [`SessionRegistry`]. Bindings persist
//! across requests of the same session until removed or until the session
//! ends.
//!
//! # Example
//!
//! ```ignore
//! use scopestore::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(SessionRegistry::new());
//! let session = registry.open_session();
//!
//! // First request
//! let mut store = SessionStore::bind(&registry, session)?;
//! store.put_new("cart", Value::from(json!(["item1"])))?;
//!
//! // A later request of the same session
//! let store = SessionStore::bind(&registry, session)?;
//! let cart = store.get("cart")?;
//! ```

use crate::store::GuardedStore;
use scopestore_core::{SessionId, StoreResult};
use scopestore_storage::{SessionMap, SessionRegistry};
use std::sync::Arc;

/// Store whose bindings live as long as a user session.
pub type SessionStore = GuardedStore<SessionMap>;

impl GuardedStore<SessionMap> {
    /// Bind a store to an open session.
    ///
    /// Fails with `SessionInactive` if the registry has no such session;
    /// sessions are never opened implicitly.
    pub fn bind(registry: &Arc<SessionRegistry>, session: SessionId) -> StoreResult<Self> {
        SessionRegistry::map(registry, session).map(GuardedStore::from_backing)
    }

    /// The session this store is bound to.
    pub fn session_id(&self) -> SessionId {
        self.backing().session_id()
    }
}
