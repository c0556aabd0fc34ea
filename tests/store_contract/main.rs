//! Store Contract Test Suite
//!
//! Verifies that request-scoped and session-scoped stores honour the same
//! guarded contract, and that each scope keeps its bindings exactly as long
//! as it should.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test store_contract
//!
//! # Session scope only
//! cargo test --test store_contract session::
//! ```

use std::sync::Arc;

use scopestore::prelude::*;

// Test modules
pub mod contract;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a test-writer subscriber so `RUST_LOG`-style debugging works.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Create an empty shared session registry
pub fn create_registry() -> Arc<SessionRegistry> {
    Arc::new(SessionRegistry::new())
}

/// Create a registry with one open session and a store bound to it
pub fn create_session_store() -> (Arc<SessionRegistry>, SessionId, SessionStore) {
    let registry = create_registry();
    let session = registry.open_session();
    let store = SessionStore::bind(&registry, session).expect("session was just opened");
    (registry, session, store)
}

/// Standard test values covering every value type
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool_true", Value::Bool(true)),
        ("bool_false", Value::Bool(false)),
        ("int_pos", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("int_zero", Value::Int(0)),
        ("float_pos", Value::Float(3.14159)),
        ("float_neg", Value::Float(-2.71828)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("string_empty", Value::String("".into())),
        ("bytes", Value::Bytes(vec![0x00, 0x01, 0xFF, 0xFE])),
        ("bytes_empty", Value::Bytes(vec![])),
        (
            "array",
            Value::Array(vec![Value::Int(1), Value::String("two".into())]),
        ),
        ("object", {
            let mut m = std::collections::HashMap::new();
            m.insert("nested".to_string(), Value::Int(123));
            Value::Object(m)
        }),
    ]
}
