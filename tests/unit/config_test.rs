//! Tests for client configuration

use std::collections::HashMap;
use std::fs;

use tempfile::TempDir;
use todosync::config::{ClientConfig, DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL};
use todosync::core::models::FilterValue;

// =============================================================================
// LOAD / SAVE
// =============================================================================

#[test]
fn test_config_default() {
    let config = ClientConfig::default();
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert!(config.api.api_key.is_none());
    assert_eq!(config.ui.filter, FilterValue::All);
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = ClientConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, ClientConfig::default());
}

#[test]
fn test_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let mut config = ClientConfig::default();
    config.api.base_url = "http://localhost:8080/api/".to_string();
    config.api.api_key = Some("secret".to_string());
    config.ui.filter = FilterValue::Active;
    config.save_to(&path).unwrap();

    let loaded = ClientConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api]\napi_key = \"k\"\n").unwrap();

    let config = ClientConfig::load_from(&path).unwrap();
    assert_eq!(config.api.api_key.as_deref(), Some("k"));
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.ui.filter, FilterValue::All);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[api\nbroken").unwrap();

    let err = ClientConfig::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn test_key_is_not_written_when_unset() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    ClientConfig::default().save_to(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("base_url"));
    assert!(!content.contains("api_key"));
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn test_overrides_replace_file_values() {
    let vars: HashMap<&str, &str> =
        HashMap::from([(ENV_BASE_URL, "http://override/"), (ENV_API_KEY, "env-key")]);

    let config = ClientConfig::default().with_overrides(|name| vars.get(name).map(ToString::to_string));
    assert_eq!(config.api.base_url, "http://override/");
    assert_eq!(config.api.api_key.as_deref(), Some("env-key"));
}

#[test]
fn test_empty_overrides_are_ignored() {
    let mut base = ClientConfig::default();
    base.api.api_key = Some("file-key".to_string());

    let config = base.clone().with_overrides(|_| Some("  ".to_string()));
    assert_eq!(config, base);
}
