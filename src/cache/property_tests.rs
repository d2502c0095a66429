//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a plain `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use bytes::Bytes;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates cache keys shaped like request URLs, plus arbitrary text
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "https://pokeapi\\.co/api/v2/(pokemon|location-area)/[a-z0-9-]{1,16}",
        ".{0,32}",
    ]
}

/// Generates opaque payloads
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// A single operation against the store
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
    Sweep,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy())
            .prop_map(|(key, value)| CacheOp::Add { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Sweep),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any interleaving of adds, lookups and sweeps behaves like a map with
    // last-write-wins semantics while no entry has outlived the TTL.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..60)) {
        let mut store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Vec<u8>> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Add { key, value } => {
                    store.add(key.clone(), Bytes::from(value.clone()));
                    model.insert(key, value);
                }
                CacheOp::Get { key } => {
                    let expected = model.get(&key).map(|v| Bytes::from(v.clone()));
                    prop_assert_eq!(store.get(&key), expected.clone());
                    prop_assert_eq!(store.get_fresh(&key), expected);
                }
                CacheOp::Sweep => {
                    prop_assert_eq!(store.cleanup_expired(), 0, "Nothing should be expired yet");
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }
    }

    // Storing a pair and reading it back before expiry returns the same bytes.
    #[test]
    fn prop_miss_then_hit(key in key_strategy(), value in value_strategy()) {
        let mut store = CacheStore::new(TEST_TTL);

        prop_assert!(store.get(&key).is_none(), "Fresh store should miss");

        store.add(key.clone(), Bytes::from(value.clone()));
        prop_assert_eq!(store.get(&key), Some(Bytes::from(value)));
    }

    // A second add for the same key replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let mut store = CacheStore::new(TEST_TTL);

        store.add(key.clone(), Bytes::from(value1));
        store.add(key.clone(), Bytes::from(value2.clone()));

        prop_assert_eq!(store.get(&key), Some(Bytes::from(value2)));
        prop_assert_eq!(store.len(), 1, "Should have exactly one entry after overwrite");
    }
}

// Separate proptest block with fewer cases for time-sensitive tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // After the TTL has elapsed, a sweep removes every entry and a
    // read-checked lookup misses even before the sweep.
    #[test]
    fn prop_sweep_removes_everything_past_ttl(
        entries in prop::collection::hash_map(key_strategy(), value_strategy(), 1..20)
    ) {
        let mut store = CacheStore::new(Duration::from_millis(20));

        for (key, value) in &entries {
            store.add(key.clone(), Bytes::from(value.clone()));
        }

        sleep(Duration::from_millis(40));

        for key in entries.keys() {
            prop_assert!(store.get(key).is_some(), "Presence check ignores age");
            prop_assert!(store.get_fresh(key).is_none(), "Read check honours TTL");
        }

        prop_assert_eq!(store.cleanup_expired(), entries.len());
        prop_assert!(store.is_empty());
    }
}
