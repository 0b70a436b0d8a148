//! Registrar configuration tests
//!
//! Loading `RegistrarConfig` from TOML and JSON the way callers embed it in
//! their own configuration files.

use cardano_config::{ConfigError, RegistrarConfig, UnrecognizedDialectPolicy};

#[test]
fn test_empty_toml_uses_defaults() {
    let config = RegistrarConfig::from_toml_str("").unwrap();
    assert_eq!(config, RegistrarConfig::default());
}

#[test]
fn test_toml_reject_policy() {
    let config = RegistrarConfig::from_toml_str(r#"unrecognized_dialect = "reject""#).unwrap();
    assert_eq!(config, RegistrarConfig::strict());
}

#[test]
fn test_toml_unknown_policy_fails() {
    let result = RegistrarConfig::from_toml_str(r#"unrecognized_dialect = "explode""#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_json_roundtrip() {
    let config = RegistrarConfig::strict();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"unrecognized_dialect":"reject"}"#);

    let parsed: RegistrarConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.unrecognized_dialect, UnrecognizedDialectPolicy::Reject);
}
