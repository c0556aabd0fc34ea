//! Contract Tests
//!
//! Every check here is written once against `Store` and run against both
//! scopes, so the two stores cannot drift apart.

use crate::*;
use proptest::prelude::*;

// =============================================================================
// CHECKS
// =============================================================================

fn check_unbound_key_absent<S: Store>(store: &mut S) {
    assert!(!store.has("never_put"));
}

fn check_put_then_get<S: Store>(store: &mut S) {
    store.put("key", Value::Int(42), false).unwrap();
    assert!(store.has("key"));
    assert_eq!(store.get("key").unwrap(), Value::Int(42));
}

fn check_duplicate_put_rejected<S: Store>(store: &mut S) {
    store.put("key", Value::Int(1), false).unwrap();

    let err = store.put("key", Value::Int(2), false).unwrap_err();
    assert_eq!(err, StoreError::DuplicateKey { key: "key".into() });
    assert_eq!(store.get("key").unwrap(), Value::Int(1));
}

fn check_overwrite_replaces<S: Store>(store: &mut S) {
    store.put("key", Value::Int(1), false).unwrap();
    store.put("key", Value::Int(2), true).unwrap();
    assert_eq!(store.get("key").unwrap(), Value::Int(2));
}

fn check_missing_get_and_remove<S: Store>(store: &mut S) {
    let missing = StoreError::MissingKey { key: "ghost".into() };
    assert_eq!(store.get("ghost").unwrap_err(), missing);
    assert_eq!(store.remove("ghost").unwrap_err(), missing);
}

fn check_remove_unbinds<S: Store>(store: &mut S) {
    store.put_new("key", Value::Bool(true)).unwrap();
    assert!(store.remove("key").unwrap());
    assert!(!store.has("key"));
    assert!(store.get("key").unwrap_err().is_missing_key());
}

fn check_rebind_after_remove<S: Store>(store: &mut S) {
    store.put_new("key", Value::Int(1)).unwrap();
    store.remove("key").unwrap();
    store.put_new("key", Value::Int(2)).unwrap();
    assert_eq!(store.get("key").unwrap(), Value::Int(2));
}

fn check_all_value_types<S: Store>(store: &mut S) {
    for (name, value) in standard_test_values() {
        let key = format!("type:{}", name);
        store.put_new(&key, value.clone()).unwrap();
        assert_eq!(store.get(&key).unwrap(), value, "Failed for type: {}", name);
    }
}

fn check_empty_key<S: Store>(store: &mut S) {
    store.put_new("", Value::Int(0)).unwrap();
    assert!(store.has(""));
    assert!(store.remove("").unwrap());
}

fn run_all<S: Store>(mut fresh: impl FnMut() -> S) {
    check_unbound_key_absent(&mut fresh());
    check_put_then_get(&mut fresh());
    check_duplicate_put_rejected(&mut fresh());
    check_overwrite_replaces(&mut fresh());
    check_missing_get_and_remove(&mut fresh());
    check_remove_unbinds(&mut fresh());
    check_rebind_after_remove(&mut fresh());
    check_all_value_types(&mut fresh());
    check_empty_key(&mut fresh());
}

// =============================================================================
// BOTH SCOPES
// =============================================================================

#[test]
fn test_request_store_honours_contract() {
    run_all(RequestStore::new);
}

#[test]
fn test_session_store_honours_contract() {
    let registry = create_registry();
    run_all(|| {
        let session = registry.open_session();
        SessionStore::bind(&registry, session).unwrap()
    });
}

// =============================================================================
// PROPERTIES
// =============================================================================

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // NaN never equals itself, so keep floats finite
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        ".*".prop_map(Value::String),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Value::Bytes),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

/// A put without overwrite on `key` must leave `v1` in place, whatever the
/// store scope.
fn prop_guard<S: Store>(store: &mut S, key: &str, v1: Value, v2: Value) {
    store.put(key, v1.clone(), false).unwrap();
    assert!(store.put(key, v2.clone(), false).unwrap_err().is_duplicate_key());
    assert_eq!(store.get(key).unwrap(), v1);
    store.put(key, v2.clone(), true).unwrap();
    assert_eq!(store.get(key).unwrap(), v2);
    assert!(store.remove(key).unwrap());
    assert!(!store.has(key));
}

proptest! {
    #[test]
    fn prop_request_put_get_roundtrip(key in ".{0,24}", value in arb_value()) {
        let mut store = RequestStore::new();
        prop_assert!(!store.has(&key));
        store.put(&key, value.clone(), false).unwrap();
        prop_assert!(store.has(&key));
        prop_assert_eq!(store.get(&key).unwrap(), value);
    }

    #[test]
    fn prop_request_overwrite_guard(key in ".{0,24}", v1 in arb_value(), v2 in arb_value()) {
        prop_guard(&mut RequestStore::new(), &key, v1, v2);
    }

    #[test]
    fn prop_session_overwrite_guard(key in ".{0,24}", v1 in arb_value(), v2 in arb_value()) {
        let (_registry, _session, mut store) = create_session_store();
        prop_guard(&mut store, &key, v1, v2);
    }

    #[test]
    fn prop_distinct_keys_independent(
        keys in prop::collection::hash_set("[a-z]{1,8}", 1..16),
    ) {
        let mut store = RequestStore::new();
        for (i, key) in keys.iter().enumerate() {
            store.put_new(key, Value::Int(i as i64)).unwrap();
        }
        prop_assert_eq!(store.len(), keys.len());
        for (i, key) in keys.iter().enumerate() {
            prop_assert_eq!(store.get(key).unwrap(), Value::Int(i as i64));
        }
    }
}
