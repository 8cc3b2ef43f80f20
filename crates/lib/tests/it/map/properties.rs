use multikey::{Component, Key, MultiKeyMap, Object, Symbol, key};

use crate::helpers::*;

#[test]
fn test_primitive_keys_match_by_value() {
    let mut map = MultiKeyMap::new();
    let stored = key![1, "one", true, (), 2.5];
    map.set(stored.clone(), 1);

    // A separately built key with equal components is the same key.
    let rebuilt = Key::from(vec![
        Component::Number(1.0),
        Component::Text("one".to_string()),
        Component::Bool(true),
        Component::Null,
        Component::Number(2.5),
    ]);
    assert_entry(&map, &rebuilt, 1);
    assert_missing(&map, &key![1, "one", true, (), 2.5, ()]);
    assert_missing(&map, &key!["1", "one", true, (), 2.5]);
}

#[test]
fn test_references_match_by_identity() {
    let mut map = MultiKeyMap::new();
    let object = Object::new(vec![1, 2]);
    let symbol = Symbol::new("tag");
    map.set(key![object.clone(), symbol.clone()], "hit");

    assert_entry(&map, &key![object.clone(), symbol.clone()], "hit");
    assert_missing(&map, &key![Object::new(vec![1, 2]), symbol.clone()]);
    assert_missing(&map, &key![object, Symbol::new("tag")]);
}

#[test]
fn test_size_counts_distinct_fingerprints() {
    let mut map = MultiKeyMap::new();
    let keys = [key!["a"], key!["b"], key!["a"], key![1], key![1.0], key![f64::NAN], key![f64::NAN]];
    for (i, key) in keys.into_iter().enumerate() {
        map.set(key, i);
    }
    assert_size(&map, 4);
}

#[test]
fn test_delete_adjusts_size_by_one() {
    let mut map = setup_sample_map();
    assert!(!map.delete(key!["absent"]));
    assert_size(&map, 3);
    assert!(map.delete(key!["-"]));
    assert_size(&map, 2);
    assert!(!map.delete(key!["-"]));
    assert_size(&map, 2);
}

#[test]
fn test_fresh_reference_after_delete_does_not_collide() {
    let mut map = MultiKeyMap::new();
    let first = Object::new(String::from("first"));
    map.set(key![first.clone()], 1);
    assert!(map.delete(key![first.clone()]));
    drop(first);

    let second = Object::new(String::from("second"));
    assert_missing(&map, &key![second.clone()]);
    map.set(key![second.clone()], 2);
    assert_size(&map, 1);
    assert_eq!(map.registry().len(), 2);
    assert_entry(&map, &key![second], 2);
}

#[test]
fn test_elided_position_matches_explicit_absent() {
    let mut map = MultiKeyMap::new();
    map.set(key![1, _, 3], "elided");

    assert_entry(&map, &key![1, Component::Absent, 3], "elided");
    assert_entry(&map, &key![1, None::<&str>, 3], "elided");
    assert_missing(&map, &key![1, (), 3]);
    assert_missing(&map, &key![1, 3]);
}

#[test]
fn test_nan_matches_nan() {
    let mut map = MultiKeyMap::new();
    map.set(key![f64::NAN], "nan");
    assert_entry(&map, &key![0.0_f64 / 0.0], "nan");
    assert_entry(&map, &key![-f64::NAN], "nan");
    assert_missing(&map, &key![f64::INFINITY]);
}

#[test]
fn test_signed_zero_is_one_key() {
    let mut map = MultiKeyMap::new();
    map.set(key![-0.0], "zero");
    assert_entry(&map, &key![0], "zero");
    assert_entry(&map, &key![0.0], "zero");
}
