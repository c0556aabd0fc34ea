//! Store configuration.
//!
//! [`StoreOptions`] carries capacity hints for the backing maps. It can be
//! built in code with the builder-style setters or parsed from TOML:
//!
//! ```toml
//! request_capacity = 32
//! session_capacity = 8
//! expected_sessions = 1024
//! ```

use scopestore_core::{StoreError, StoreResult};
use scopestore_storage::SessionRegistry;
use serde::{Deserialize, Serialize};

/// Capacity hints for request maps and the session registry.
///
/// ```ignore
/// use scopestore::StoreOptions;
///
/// let opts = StoreOptions::new().request_capacity(64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreOptions {
    /// Initial capacity of each request map
    pub request_capacity: usize,
    /// Initial capacity of each session's bindings
    pub session_capacity: usize,
    /// Number of concurrently open sessions to size the registry for
    pub expected_sessions: usize,
}

impl StoreOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    pub fn from_toml_str(source: &str) -> StoreResult<Self> {
        let opts: StoreOptions =
            toml::from_str(source).map_err(|e| StoreError::InvalidConfig(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Check the options for values no store can work with.
    pub fn validate(&self) -> StoreResult<()> {
        if self.expected_sessions == 0 {
            return Err(StoreError::InvalidConfig(
                "expected_sessions must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Set the initial capacity of request maps.
    pub fn request_capacity(mut self, capacity: usize) -> Self {
        self.request_capacity = capacity;
        self
    }

    /// Set the initial capacity of each session's bindings.
    pub fn session_capacity(mut self, capacity: usize) -> Self {
        self.session_capacity = capacity;
        self
    }

    /// Set the number of sessions the registry is sized for.
    pub fn expected_sessions(mut self, sessions: usize) -> Self {
        self.expected_sessions = sessions;
        self
    }

    /// Build an empty session registry sized by these options.
    pub fn session_registry(&self) -> SessionRegistry {
        SessionRegistry::with_capacity(self.expected_sessions, self.session_capacity)
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            request_capacity: 16,
            session_capacity: 16,
            expected_sessions: 64,
        }
    }
}
