//! Config file loading and token resolution

use ghdigest::config::Config;
use ghdigest::constants;
use ghdigest::resolve_token;
use serial_test::serial;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("ghdigest.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    path.to_str().expect("Config path not UTF-8").to_string()
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"---
api_base: https://ghe.example.com/api/v3
user_agent: weekly-report
max_pages: 20
topic_concurrency: 4
"#,
    );

    let config = Config::load(&path).unwrap();
    let client_config = config.client_config();

    assert_eq!(client_config.api_base, "https://ghe.example.com/api/v3");
    assert_eq!(client_config.user_agent, "weekly-report");
    assert_eq!(client_config.max_pages, 20);
    assert_eq!(client_config.topic_concurrency, 4);
}

#[test]
fn test_load_empty_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");

    let config = Config::load(&path).unwrap();
    assert_eq!(config, Config::new());
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "api_base: ftp://example.com\nmax_pages: 0\n");

    let message = Config::load(&path).unwrap_err().to_string();
    assert!(message.contains("api_base"));
    assert!(message.contains("max_pages"));
}

#[test]
fn test_load_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "max_pages: [unclosed");

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn test_missing_default_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(constants::config::DEFAULT_CONFIG_FILE);

    let config = Config::load_or_default(path.to_str().unwrap(), false).unwrap();
    assert_eq!(config, Config::new());
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.yaml");

    let err = Config::load_or_default(path.to_str().unwrap(), true).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
#[serial]
fn test_resolve_token_prefers_explicit_value() {
    unsafe { std::env::set_var(constants::env::GITHUB_TOKEN, "from-env") };
    assert_eq!(
        resolve_token(Some("from-flag".to_string())).as_deref(),
        Some("from-flag")
    );
    unsafe { std::env::remove_var(constants::env::GITHUB_TOKEN) };
}

#[test]
#[serial]
fn test_resolve_token_falls_back_to_env() {
    unsafe { std::env::set_var(constants::env::GITHUB_TOKEN, "from-env") };
    assert_eq!(resolve_token(None).as_deref(), Some("from-env"));
    unsafe { std::env::remove_var(constants::env::GITHUB_TOKEN) };
}

#[test]
#[serial]
fn test_resolve_token_ignores_blank_values() {
    unsafe { std::env::set_var(constants::env::GITHUB_TOKEN, "  ") };
    assert_eq!(resolve_token(None), None);
    unsafe { std::env::remove_var(constants::env::GITHUB_TOKEN) };
    assert_eq!(resolve_token(Some(String::new())), None);
}
