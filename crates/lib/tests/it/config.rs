//! Configuration integration tests

use multikey::{Error, MapConfig, MultiKeyMap, Retention};

#[test]
fn test_defaults_from_empty_document() {
    let config = MapConfig::from_json("{}").unwrap();
    assert_eq!(config, MapConfig::default());
    assert_eq!(config.retention, Retention::Strong);
}

#[test]
fn test_round_trip_through_json() {
    let config = MapConfig::new()
        .with_retention(Retention::Weak)
        .with_capacity(16);
    let json = config.to_json().unwrap();
    assert_eq!(MapConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_invalid_documents() {
    for document in [r#"{ "retention": "sometimes" }"#, r#"{ "initial_capacity": -1 }"#, "["] {
        let err = MapConfig::from_json(document).unwrap_err();
        assert!(err.is_config_error(), "{document} should be rejected");
        assert_eq!(err.module(), "config");
        assert!(matches!(err, Error::Config(_)));
    }
}

#[test]
fn test_config_drives_map() {
    let config = MapConfig::from_json(r#"{ "retention": "weak", "initial_capacity": 4 }"#).unwrap();
    let map: MultiKeyMap<u32> = MultiKeyMap::with_config(config);
    assert_eq!(map.retention(), Retention::Weak);
    assert!(map.is_empty());
}
