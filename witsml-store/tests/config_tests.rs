use pretty_assertions::assert_eq;
use std::io::Write;
use witsml_model::TokenPolicy;
use witsml_store::{ClientConfig, StoreError};
use witsml_types::{UnitProfile, WitsmlVersion};

#[test]
fn defaults_target_the_newest_version() {
    let config = ClientConfig::default();
    assert_eq!(config.version, WitsmlVersion::V1_4_1);
    assert_eq!(config.units, UnitProfile::ServerDefault);
    assert_eq!(config.decode.delimiter, ',');
}

#[test]
fn partial_toml_keeps_defaults() {
    let config = ClientConfig::from_toml_str(r#"version = "1.3.1.1""#).unwrap();
    assert_eq!(config.version, WitsmlVersion::V1_3_1);
    assert_eq!(config.decode, ClientConfig::default().decode);
}

#[test]
fn load_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
version = "1.2.0"
units = "imperial"

[decode]
null_value = "-999.25"
harmonize_units = true
numeric_policy = "fail"
"#
    )
    .unwrap();

    let config = ClientConfig::load(file.path()).unwrap();
    assert_eq!(config.version, WitsmlVersion::V1_2_0);
    assert_eq!(config.units, UnitProfile::Imperial);
    assert_eq!(config.decode.null_value, "-999.25");
    assert!(config.decode.harmonize_units);
    assert_eq!(config.decode.numeric_policy, TokenPolicy::Fail);
    assert_eq!(config.decode.datetime_policy, TokenPolicy::Fail);
}

#[test]
fn toml_round_trips() {
    let config = ClientConfig {
        version: WitsmlVersion::V1_3_1,
        units: UnitProfile::Metric,
        ..ClientConfig::default()
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(ClientConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn bad_input_is_a_config_error() {
    let err = ClientConfig::from_toml_str(r#"version = "9.9""#).unwrap_err();
    assert!(matches!(err, StoreError::Config(_)), "{err}");

    let dir = tempfile::tempdir().unwrap();
    let err = ClientConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, StoreError::Config(_)), "{err}");
}
