//! Tests for configuration parsing

use psyche_core::StorefrontConfig;

#[test]
fn default_config() {
    let config = StorefrontConfig::default();
    assert!(config.api_base.starts_with("https://"));
    assert!(!config.checkout_url.is_empty());
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn serialize_config() {
    let config = StorefrontConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("api_base"));
    assert!(toml_str.contains("checkout_url"));
}

#[test]
fn parse_full_config() {
    let toml_str = r#"
api_base = "https://staging.psyche.page/api"
checkout_url = "https://pay.example.com/psyche"
timeout_secs = 10
"#;
    let config: StorefrontConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.api_base, "https://staging.psyche.page/api");
    assert_eq!(config.checkout_url, "https://pay.example.com/psyche");
    assert_eq!(config.timeout_secs, 10);
}

#[test]
fn missing_keys_take_defaults() {
    let config: StorefrontConfig =
        toml::from_str(r#"api_base = "http://localhost:5000/api""#).unwrap();
    assert_eq!(config.api_base, "http://localhost:5000/api");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.checkout_url, StorefrontConfig::default().checkout_url);
}

#[test]
fn from_file_reads_and_parses() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = 2\n").unwrap();

    let config = StorefrontConfig::from_file(&path).unwrap();
    assert_eq!(config.timeout_secs, 2);
}

#[test]
fn from_file_rejects_malformed_toml() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = [not toml").unwrap();

    assert!(StorefrontConfig::from_file(&path).is_err());
}
