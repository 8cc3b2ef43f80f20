use multikey::{Key, MultiKeyMap, key};

use crate::helpers::*;

#[test]
fn test_insertion_order() {
    let map = setup_sample_map();
    let keys: Vec<&Key> = map.keys().collect();
    assert_eq!(keys, vec![&key!["-"], &key![":", "-"], &key![":", "-", "%"]]);

    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, vec!["first", "second", "third"]);

    let entries: Vec<_> = map.entries().map(|(k, v)| (k.clone(), *v)).collect();
    assert_eq!(entries, sample_pairs());
}

#[test]
fn test_overwrite_keeps_position_and_delete_then_set_appends() {
    let mut map = setup_sample_map();
    map.set(key!["-"], "updated");
    assert_eq!(map.values().next(), Some(&"updated"));

    map.delete(key!["-"]);
    map.set(key!["-"], "back");
    let last = map.iter().next_back().map(|(k, v)| (k.clone(), *v));
    assert_eq!(last, Some((key!["-"], "back")));
}

#[test]
fn test_traversals_are_restartable() {
    let map = setup_sample_map();
    let first: Vec<_> = map.iter().collect();
    let second: Vec<_> = (&map).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(map.keys().len(), 3);
}

#[test]
fn test_for_each() {
    let map = setup_sample_map();
    let mut seen = Vec::new();
    map.for_each(|value, key, container| {
        assert_eq!(container.get(key), Some(value));
        seen.push(*value);
    });
    assert_eq!(seen, vec!["first", "second", "third"]);

    let empty: MultiKeyMap<u8> = MultiKeyMap::new();
    let mut calls = 0;
    empty.for_each(|_, _, _| calls += 1);
    assert_eq!(calls, 0);
}

#[test]
fn test_construction_from_pairs() {
    let map: MultiKeyMap<i32> = [(key!["a"], 1), (key!["b"], 2), (key!["a"], 3)]
        .into_iter()
        .collect();
    assert_size(&map, 2);
    assert_entry(&map, &key!["a"], 3);
    assert_eq!(map.keys().next(), Some(&key!["a"]));

    let owned: Vec<(Key, i32)> = map.into_iter().collect();
    assert_eq!(owned, vec![(key!["a"], 3), (key!["b"], 2)]);
}
