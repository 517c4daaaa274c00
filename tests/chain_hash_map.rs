// ChainHashMap behavior suite (black box).
//
// Each test documents the behavior verified. The core behaviors exercised:
// - Round trip: set(k, v) then get(k) observes v.
// - Overwrite: setting an existing key replaces the value in place and
//   leaves the entry count unchanged.
// - Removal: remove(k) unlinks the entry and later lookups see absence.
// - Nullable values: a key set with None is present (contains_key) but
//   unreadable (get), distinct from an absent key.
// - Resizing: growth past half full and shrink below a quarter full step
//   the bucket count through the prime size table, preserving the
//   observable key/value set.
use chain_hashmap::ChainHashMap;

// Test: round trip over a batch of unique keys.
// Verifies: every inserted pair is observable via get.
#[test]
fn round_trip_unique_keys() {
    let mut m = ChainHashMap::new();
    for i in 0..20 {
        m.set(&format!("key{i}"), Some(i * 10));
    }
    assert_eq!(m.len(), 20);
    for i in 0..20 {
        assert_eq!(m.get(&format!("key{i}")), Some(&(i * 10)));
    }
}

// Test: overwrite semantics.
// Verifies: second set on the same key replaces the value; len unchanged.
#[test]
fn overwrite_replaces_value_without_growth() {
    let mut m = ChainHashMap::new();
    m.set("k", Some(1));
    let len_before = m.len();
    let buckets_before = m.bucket_count();

    m.set("k", Some(2));
    assert_eq!(m.get("k"), Some(&2));
    assert_eq!(m.len(), len_before);
    assert_eq!(m.bucket_count(), buckets_before);

    // Overwriting with None keeps the entry but clears the value.
    m.set("k", None);
    assert!(m.contains_key("k"));
    assert_eq!(m.get("k"), None);
    assert_eq!(m.len(), len_before);
}

// Test: removal.
// Verifies: remove returns the stored value, later get/contains_key see
// absence, and removing an absent key is a None, not an error.
#[test]
fn remove_makes_key_absent() {
    let mut m = ChainHashMap::new();
    m.set("k", Some(7));
    assert_eq!(m.remove("k"), Some(7));
    assert_eq!(m.get("k"), None);
    assert!(!m.contains_key("k"));
    assert_eq!(m.remove("k"), None);
    assert_eq!(m.len(), 0);
}

// Test: null value vs absent key.
// Verifies: the two states are distinguishable through contains_key.
#[test]
fn null_value_is_present_but_unreadable() {
    let mut m: ChainHashMap<i32> = ChainHashMap::new();
    m.set("nil", None);

    assert!(m.contains_key("nil"));
    assert_eq!(m.get("nil"), None);

    assert!(!m.contains_key("other"));
    assert_eq!(m.get("other"), None);
}

// Test: the concrete growth scenario from the size table's smallest prime.
// Verifies: 26 entries stay at 53 buckets (26 > 53/2 is false under
// integer division); the 27th insert crosses the threshold and grows the
// table to 101; every key is still readable afterwards.
#[test]
fn growth_scenario_53_to_101() {
    let mut m = ChainHashMap::new();
    assert_eq!(m.bucket_count(), 53);

    for i in 0..26 {
        m.set(&format!("key{i}"), Some(i));
    }
    assert_eq!(m.len(), 26);
    assert_eq!(m.bucket_count(), 53);

    m.set("key26", Some(26));
    assert_eq!(m.len(), 27);
    assert_eq!(m.bucket_count(), 101);

    for i in 0..27 {
        assert_eq!(m.get(&format!("key{i}")), Some(&i));
    }
}

// Test: load factor stays bounded across a long insert run.
// Verifies: after every set, len <= bucket_count / 2 (growth always fires
// exactly when needed, far from the top-of-table clamp at these sizes).
#[test]
fn growth_keeps_load_factor_bounded() {
    let mut m = ChainHashMap::new();
    for i in 0..2_000 {
        m.set(&format!("key{i}"), Some(i));
        assert!(
            m.len() <= m.bucket_count() / 2,
            "load factor exceeded after insert {i}: {} entries in {} buckets",
            m.len(),
            m.bucket_count()
        );
    }
    for i in 0..2_000 {
        assert_eq!(m.get(&format!("key{i}")), Some(&i));
    }
}

// Test: shrink trigger.
// Verifies: deleting below a quarter full steps the bucket count down by
// exactly one prime, and an empty table never shrinks below the smallest.
#[test]
fn shrink_scenario_101_to_53() {
    let mut m = ChainHashMap::new();
    for i in 0..28 {
        m.set(&format!("key{i}"), Some(i));
    }
    assert_eq!(m.bucket_count(), 101);

    // 101 / 4 == 25: the removal that leaves 24 entries shrinks the table.
    for i in (25..28).rev() {
        m.remove(&format!("key{i}"));
    }
    assert_eq!(m.len(), 25);
    assert_eq!(m.bucket_count(), 101);

    m.remove("key24");
    assert_eq!(m.len(), 24);
    assert_eq!(m.bucket_count(), 53);

    for i in 0..24 {
        m.remove(&format!("key{i}"));
    }
    assert!(m.is_empty());
    assert_eq!(m.bucket_count(), 53);
}

// Test: resizing preserves the observable map.
// Verifies: after a grow and a shrink, every pair (including null-valued
// entries) is observably identical and len is unchanged.
#[test]
fn resize_cycle_preserves_pairs() {
    let mut m = ChainHashMap::new();
    for i in 0..26 {
        m.set(&format!("key{i}"), if i % 5 == 0 { None } else { Some(i) });
    }
    assert_eq!(m.bucket_count(), 53);

    // Grow: one more insert crosses half full.
    m.set("extra", Some(-1));
    assert_eq!(m.bucket_count(), 101);

    // Shrink: delete down past a quarter full (24 < 101/4).
    m.remove("extra");
    m.remove("key25");
    m.remove("key24");
    assert_eq!(m.bucket_count(), 53);

    assert_eq!(m.len(), 24);
    for i in 0..24 {
        let key = format!("key{i}");
        assert!(m.contains_key(&key));
        assert_eq!(m.get(&key), if i % 5 == 0 { None } else { Some(&i) });
    }
}

// Test: iteration coverage.
// Verifies: iter() yields each live pair exactly once, in some order.
#[test]
fn iter_covers_all_pairs() {
    let mut m = ChainHashMap::new();
    m.set("a", Some(1));
    m.set("b", None);
    m.set("c", Some(3));

    let mut pairs: Vec<(String, Option<i32>)> = m
        .iter()
        .map(|(k, v)| (k.to_string(), v.copied()))
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), Some(1)),
            ("b".to_string(), None),
            ("c".to_string(), Some(3)),
        ]
    );
}
