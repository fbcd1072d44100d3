//! Configuration loading tests

use std::collections::HashMap;

use iptracker::config::StaticConfig;

fn write_config(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    let path = path.to_string_lossy().into_owned();
    (dir, path)
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let config =
        StaticConfig::load_with_env(Some(path.to_str().unwrap()), Some(HashMap::new())).unwrap();

    assert_eq!(config.geo.endpoint, "https://geo.ipify.org/api/v2/country,city");
    assert!(config.geo.api_key.is_empty());
    assert_eq!(config.geo.timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_file_values_are_read() {
    let (_dir, path) = write_config(
        r#"
[geo]
endpoint = "http://localhost:9000/geo"
api_key = "at_file"
timeout_secs = 3

[logging]
level = "debug"
format = "json"
file = "iptracker.log"
"#,
    );

    let config = StaticConfig::load_with_env(Some(&path), Some(HashMap::new())).unwrap();

    assert_eq!(config.geo.endpoint, "http://localhost:9000/geo");
    assert_eq!(config.geo.api_key, "at_file");
    assert_eq!(config.geo.timeout_secs, 3);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.file.as_deref(), Some("iptracker.log"));
}

#[test]
fn test_environment_overrides_file() {
    let (_dir, path) = write_config("[geo]\napi_key = \"at_file\"\n");

    let env = HashMap::from([
        ("IPTRACKER__GEO__API_KEY".to_string(), "at_env".to_string()),
        ("IPTRACKER__GEO__TIMEOUT_SECS".to_string(), "7".to_string()),
    ]);
    let config = StaticConfig::load_with_env(Some(&path), Some(env)).unwrap();

    assert_eq!(config.geo.api_key, "at_env");
    assert_eq!(config.geo.timeout_secs, 7);
}

#[test]
fn test_malformed_file_is_config_error() {
    let (_dir, path) = write_config("[geo\napi_key = ");

    let err = StaticConfig::load_with_env(Some(&path), Some(HashMap::new())).unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[test]
fn test_generated_sample_loads_back() {
    let (_dir, path) = write_config(&StaticConfig::generate_sample_config());

    let config = StaticConfig::load_with_env(Some(&path), Some(HashMap::new())).unwrap();
    assert_eq!(config.geo.timeout_secs, 10);
    assert_eq!(config.logging.format, "text");
}
