//! Key model integration tests
//!
//! Covers component equality, key construction and the dynamic conversions
//! that reject non-sequence key arguments.

use multikey::{Component, Error, Key, KeyError, Object, Symbol, key};
use serde_json::json;

#[test]
fn test_key_construction_forms_agree() {
    let from_macro = key!["a", 1, true, ()];
    let from_vec = Key::from(vec![
        Component::from("a"),
        Component::from(1),
        Component::from(true),
        Component::Null,
    ]);
    let from_iter: Key = ["a"].into_iter().map(Component::from).collect::<Key>().with(1).with(true).with(());

    assert_eq!(from_macro, from_vec);
    assert_eq!(from_macro, from_iter);
    assert_eq!(Key::from(from_macro.components()), from_vec);
}

#[test]
fn test_elided_position_is_absent() {
    assert_eq!(key![_], key![Component::Absent]);
    assert_eq!(key![1, _, 3], key![1, None::<i32>, 3]);
    assert_ne!(key![_], key![()]);
    assert_ne!(key![_], key!["undefined"]);
}

#[test]
fn test_reference_components_need_identity() {
    let object = Object::new(json!({}));
    let symbol = Symbol::new("3");

    assert_eq!(key![object.clone(), symbol.clone()], key![object.clone(), symbol.clone()]);
    assert_ne!(key![object.clone(), symbol.clone()], key![object, Symbol::new("3")]);
}

#[test]
fn test_scalar_component_is_invalid_argument() {
    for scalar in [
        Component::from(1),
        Component::from("text"),
        Component::from(true),
        Component::Null,
        Component::Absent,
        Component::from(Symbol::anonymous()),
    ] {
        let kind = scalar.type_name();
        let err = Key::try_from(scalar).unwrap_err();
        assert!(err.is_invalid_argument(), "{kind} should be rejected");
        assert!(err.reason().ends_with(kind));
    }
}

#[test]
fn test_json_keys() {
    let key = Key::try_from(json!([":", "-", 1.5, false, null])).unwrap();
    assert_eq!(key, key![":", "-", 1.5, false, ()]);

    for scalar in [json!(1), json!("1"), json!(true), json!(null), json!({ "a": 1 })] {
        let err = Key::try_from(scalar).unwrap_err();
        assert!(matches!(err, KeyError::InvalidArgument { .. }));
    }
}

#[test]
fn test_json_errors_convert_to_crate_error() {
    let err = Key::from_json(r#"{ "not": "a key" }"#).unwrap_err();
    assert!(matches!(err, Error::Key(KeyError::InvalidArgument { .. })));
    assert!(err.is_invalid_argument());
    assert!(err.is_key_error());

    let err = Key::from_json("not json").unwrap_err();
    assert!(err.is_serialization_error());
    assert!(!err.is_invalid_argument());
}

#[test]
fn test_nested_json_containers_compare_by_identity() {
    let a = Key::try_from(json!([[1, 2]])).unwrap();
    let b = Key::try_from(json!([[1, 2]])).unwrap();
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
}

#[test]
fn test_json_integers_beyond_f64_precision_are_rejected() {
    let err = Key::try_from(json!([9007199254740993u64])).unwrap_err();
    assert!(matches!(err, KeyError::UnsupportedJson { index: 0, .. }));
    assert!(err.is_json_error());
    assert!(!err.is_invalid_argument());

    let err = Key::from_json("[1, 18446744073709551615]").unwrap_err();
    assert!(err.is_key_error());
    assert_eq!(err.module(), "key");

    // Integers within the f64 mantissa convert losslessly.
    let key = Key::from_json("[9007199254740992, -42]").unwrap();
    assert_eq!(key, key![9007199254740992.0, -42]);
}
