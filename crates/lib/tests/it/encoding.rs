//! Fingerprint integration tests
//!
//! Checks the fingerprint invariant through the map's public surface: equal
//! keys share a fingerprint, unequal keys never do.

use multikey::{Fingerprint, KeyEncoder, MultiKeyMap, Object, Symbol, key};

fn encode_all(encoder: &mut KeyEncoder, keys: &[multikey::Key]) -> Vec<Fingerprint> {
    keys.iter().map(|k| encoder.encode(k.components())).collect()
}

#[test]
fn test_mixed_kinds_are_distinct() {
    let mut encoder = KeyEncoder::new();
    let keys = [
        key![1, "1", true],
        key![1, "1", "true"],
        key!["1", "1", true],
        key![1, "1", true, 1],
        key![1, 1, 1],
        key![false, (), _],
        key![false, "null", "undefined"],
        key!["null", "null", _],
        key![false, false, false],
        key![_, _, _],
        key![_],
        key!["undefined"],
        key![],
        key![""],
    ];
    let fingerprints = encode_all(&mut encoder, &keys);
    for (i, a) in fingerprints.iter().enumerate() {
        for (j, b) in fingerprints.iter().enumerate() {
            assert_eq!(a == b, i == j, "{} vs {}", keys[i], keys[j]);
        }
    }
}

#[test]
fn test_equal_keys_share_fingerprint() {
    let mut encoder = KeyEncoder::new();
    let object = Object::new(());
    let a = encoder.encode(key![f64::NAN, "x", object.clone()].components());
    let b = encoder.encode(key![f64::NAN, String::from("x"), object].components());
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_fingerprint_of_matches_storage() {
    let mut map = MultiKeyMap::new();
    let symbol = Symbol::new("s");
    map.set(key![symbol.clone(), 2], ());

    let fp = map.fingerprint_of(key![symbol.clone(), 2]).unwrap();
    assert!(map.directory().contains(&fp));
    assert_eq!(fp.component_count(), 2);

    // Unknown identities cannot have been stored.
    assert_eq!(map.fingerprint_of(key![Symbol::new("s"), 2]), None);
    // Primitive-only keys always have a fingerprint.
    assert!(map.fingerprint_of(key!["never stored"]).is_some());
}

#[test]
fn test_fingerprints_order_and_hash() {
    use std::collections::BTreeSet;
    use std::collections::HashSet;

    let mut encoder = KeyEncoder::new();
    let keys = [key!["b"], key!["a"], key!["a"], key![1]];
    let fingerprints = encode_all(&mut encoder, &keys);

    let hashed: HashSet<_> = fingerprints.iter().cloned().collect();
    let ordered: BTreeSet<_> = fingerprints.into_iter().collect();
    assert_eq!(hashed.len(), 3);
    assert_eq!(ordered.len(), 3);
}
