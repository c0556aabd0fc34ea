//! Request-scoped store and the request context that carries it.
//!
//! There is no process-wide request store. Each request gets its own
//! [`RequestStore`], constructed when the request starts and dropped when it
//! ends, carried through the handling code inside a [`RequestContext`].

use crate::config::StoreOptions;
use crate::session::SessionStore;
use crate::store::GuardedStore;
use scopestore_core::{RequestId, SessionId, StoreResult};
use scopestore_storage::{RequestMap, SessionRegistry};
use std::sync::Arc;
use tracing::{debug, debug_span, Span};

/// Store whose bindings live as long as one request.
pub type RequestStore = GuardedStore<RequestMap>;

impl GuardedStore<RequestMap> {
    /// Create an empty request store.
    pub fn new() -> Self {
        GuardedStore::from_backing(RequestMap::new())
    }

    /// Create an empty request store sized by `opts`.
    pub fn with_options(opts: &StoreOptions) -> Self {
        GuardedStore::from_backing(RequestMap::with_capacity(opts.request_capacity))
    }
}

impl Default for GuardedStore<RequestMap> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-request state handed through request handling.
///
/// Owns the request's [`RequestStore`] and, for requests that belong to a
/// session, a [`SessionStore`] bound to that session.
///
/// # Example
///
/// ```ignore
/// let mut ctx = RequestContext::with_session(&registry, session)?;
/// ctx.store_mut().put_new("user_id", Value::Int(42))?;
/// handle(&mut ctx)?;
/// ctx.finish();
/// ```
#[derive(Debug)]
pub struct RequestContext {
    id: RequestId,
    store: RequestStore,
    session: Option<SessionStore>,
    span: Span,
}

impl RequestContext {
    /// Start a request with no session.
    pub fn new() -> Self {
        Self::start(RequestStore::new(), None)
    }

    /// Start a request with no session, sized by `opts`.
    pub fn with_options(opts: &StoreOptions) -> Self {
        Self::start(RequestStore::with_options(opts), None)
    }

    /// Start a request belonging to an open session.
    pub fn with_session(registry: &Arc<SessionRegistry>, session: SessionId) -> StoreResult<Self> {
        let session_store = SessionStore::bind(registry, session)?;
        Ok(Self::start(RequestStore::new(), Some(session_store)))
    }

    fn start(store: RequestStore, session: Option<SessionStore>) -> Self {
        let id = RequestId::new();
        let span = match &session {
            Some(s) => debug_span!("request", request = %id, session = %s.session_id()),
            None => debug_span!("request", request = %id),
        };
        span.in_scope(|| debug!("request started"));
        Self {
            id,
            store,
            session,
            span,
        }
    }

    /// This request's id.
    pub fn id(&self) -> RequestId {
        self.id
    }

    /// The tracing span covering this request.
    pub fn span(&self) -> &Span {
        &self.span
    }

    /// The request-scoped store.
    pub fn store(&self) -> &RequestStore {
        &self.store
    }

    /// The request-scoped store, mutably.
    pub fn store_mut(&mut self) -> &mut RequestStore {
        &mut self.store
    }

    /// The session-scoped store, if this request belongs to a session.
    pub fn session(&self) -> Option<&SessionStore> {
        self.session.as_ref()
    }

    /// The session-scoped store, mutably.
    pub fn session_mut(&mut self) -> Option<&mut SessionStore> {
        self.session.as_mut()
    }

    /// End the request, discarding its request-scoped bindings.
    ///
    /// Session bindings are untouched. Returns how many request bindings
    /// were discarded.
    pub fn finish(self) -> usize {
        let discarded = self.store.len();
        self.span
            .in_scope(|| debug!(discarded, "request finished"));
        discarded
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
