//! Session registry - the per-session mapping facility
//!
//! Holds one [`Shard`] per open session, keyed by [`SessionId`]. Request
//! handlers share the registry through an `Arc` and address a session via a
//! [`SessionMap`] handle, which is the backing a session store delegates to.
//!
//! # Design
//!
//! - DashMap: sharded by SessionId, so requests of different sessions never
//!   contend
//! - Sessions are opened and ended explicitly; a write to a session that is
//!   not open fails with `SessionInactive` instead of silently reviving it

use crate::shard::Shard;
use dashmap::DashMap;
use scopestore_core::{Backing, SessionId, StoreError, StoreResult, Value};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default initial capacity of a session's shard
const DEFAULT_SHARD_CAPACITY: usize = 16;

/// In-process store of session-scoped bindings
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(SessionRegistry::new());
/// let session = registry.open_session();
/// let map = SessionRegistry::map(&registry, session)?;
/// ```
#[derive(Debug)]
pub struct SessionRegistry {
    /// Per-session shards
    sessions: DashMap<SessionId, Shard>,
    /// Initial capacity for newly opened shards
    shard_capacity: usize,
}

impl SessionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_capacity(0, DEFAULT_SHARD_CAPACITY)
    }

    /// Create a registry sized for `expected_sessions` sessions of roughly
    /// `shard_capacity` bindings each
    pub fn with_capacity(expected_sessions: usize, shard_capacity: usize) -> Self {
        Self {
            sessions: DashMap::with_capacity(expected_sessions),
            shard_capacity,
        }
    }

    /// Open a new session with a fresh random id
    pub fn open_session(&self) -> SessionId {
        let id = SessionId::new();
        self.open_session_with(id);
        id
    }

    /// Open a session under a known id
    ///
    /// Idempotent: an already open session keeps its bindings.
    pub fn open_session_with(&self, id: SessionId) {
        let capacity = self.shard_capacity;
        self.sessions
            .entry(id)
            .or_insert_with(|| {
                debug!(session = %id, "session opened");
                Shard::with_capacity(capacity)
            });
    }

    /// End a session, discarding all of its bindings
    ///
    /// Returns `true` if the session was open.
    pub fn end_session(&self, id: &SessionId) -> bool {
        match self.sessions.remove(id) {
            Some((_, shard)) => {
                debug!(session = %id, discarded = shard.len(), "session ended");
                true
            }
            None => {
                warn!(session = %id, "ending a session that is not open");
                false
            }
        }
    }

    /// Check if a session is open
    pub fn is_active(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Number of open sessions
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Number of bindings held by one session (0 if not open)
    pub fn entry_count(&self, id: &SessionId) -> usize {
        self.sessions.get(id).map(|shard| shard.len()).unwrap_or(0)
    }

    /// Number of bindings across all sessions
    pub fn total_entries(&self) -> usize {
        self.sessions.iter().map(|entry| entry.value().len()).sum()
    }

    /// Get a backing handle for an open session
    pub fn map(registry: &Arc<Self>, id: SessionId) -> StoreResult<SessionMap> {
        if !registry.is_active(&id) {
            return Err(StoreError::SessionInactive { session: id });
        }
        Ok(SessionMap {
            registry: Arc::clone(registry),
            session: id,
        })
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to one session's bindings inside a [`SessionRegistry`]
///
/// Owns no data. Every call is forwarded to the registry, so two handles to
/// the same session observe the same bindings.
#[derive(Debug, Clone)]
pub struct SessionMap {
    registry: Arc<SessionRegistry>,
    session: SessionId,
}

impl SessionMap {
    /// The session this handle addresses
    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// The registry this handle delegates to
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }
}

impl Backing for SessionMap {
    fn contains(&self, key: &str) -> bool {
        self.registry
            .sessions
            .get(&self.session)
            .map(|shard| shard.contains(key))
            .unwrap_or(false)
    }

    fn fetch(&self, key: &str) -> Option<Value> {
        self.registry
            .sessions
            .get(&self.session)
            .and_then(|shard| shard.get(key).cloned())
    }

    fn insert(&mut self, key: String, value: Value) -> StoreResult<()> {
        match self.registry.sessions.get_mut(&self.session) {
            Some(mut shard) => {
                shard.insert(key, value);
                Ok(())
            }
            None => Err(StoreError::SessionInactive {
                session: self.session,
            }),
        }
    }

    fn delete(&mut self, key: &str) -> Option<Value> {
        self.registry
            .sessions
            .get_mut(&self.session)
            .and_then(|mut shard| shard.remove(key))
    }

    fn len(&self) -> usize {
        self.registry.entry_count(&self.session)
    }

    fn keys(&self) -> Vec<String> {
        self.registry
            .sessions
            .get(&self.session)
            .map(|shard| shard.keys())
            .unwrap_or_default()
    }
}
