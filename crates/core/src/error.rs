//! Error types for store operations.
//!
//! Every error here is caller-correctable: none is transient, none is
//! retryable, and none is fatal to the process.

use crate::types::SessionId;
use thiserror::Error;

/// All store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `put` without overwrite against a key that already has a binding
    #[error("{key} already exists in the store")]
    DuplicateKey {
        /// The key that is already bound
        key: String,
    },

    /// `get` or `remove` against a key with no binding
    #[error("{key} does not exist in the store")]
    MissingKey {
        /// The key that was not found
        key: String,
    },

    /// The session is not open in the session registry
    #[error("session is not active: {session}")]
    SessionInactive {
        /// The session that was addressed
        session: SessionId,
    },

    /// Invalid store configuration
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl StoreError {
    /// Create a duplicate-key error
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        StoreError::DuplicateKey { key: key.into() }
    }

    /// Create a missing-key error
    pub fn missing_key(key: impl Into<String>) -> Self {
        StoreError::MissingKey { key: key.into() }
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::DuplicateKey { .. } => "DuplicateKey",
            StoreError::MissingKey { .. } => "MissingKey",
            StoreError::SessionInactive { .. } => "SessionInactive",
            StoreError::InvalidConfig(_) => "InvalidConfig",
        }
    }

    /// Check if this is a duplicate-key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, StoreError::DuplicateKey { .. })
    }

    /// Check if this is a missing-key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, StoreError::MissingKey { .. })
    }

    /// Store errors never succeed on retry; the caller has to change the call.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
