//! Core identifier types
//!
//! - [`SessionId`]: identity of a user session, the key of a session scope
//! - [`RequestId`]: identity of one inbound request, used for tracing

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a user session
///
/// The session identity itself is provisioned by whatever manages sessions;
/// stores only use it to select the per-session mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random SessionId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use scopestore_core::SessionId;
    ///
    /// let a = SessionId::new();
    /// let b = SessionId::new();
    /// assert_ne!(a, b);
    /// ```
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. one decoded from a session cookie)
    pub fn from_uuid(uuid: Uuid) -> Self {
        SessionId(uuid)
    }

    /// Create SessionId from raw bytes
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        SessionId(Uuid::from_bytes(bytes))
    }

    /// Get raw bytes representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(SessionId)
    }
}

/// Unique identifier for a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Create a new random RequestId using UUID v4
    pub fn new() -> Self {
        RequestId(Uuid::new_v4())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
