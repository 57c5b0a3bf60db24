//! End-to-end tests of the ghdigest binary

use serde_json::{Value, json};
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_cli(args: &[&str]) -> Output {
    Command::new("cargo")
        .args(["run", "--"])
        .args(args)
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute cargo run")
}

/// Write a config file pointing the client at `server`
fn config_for(dir: &TempDir, server: &MockServer) -> String {
    let config_path = dir.path().join("ghdigest.yaml");
    fs::write(&config_path, format!("api_base: {}\n", server.uri())).unwrap();
    config_path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("pulls"));
    assert!(stdout.contains("repos"));
}

#[test]
fn test_cli_missing_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.yaml");
    let missing = missing.to_string_lossy();

    let output = run_cli(&["-c", &missing, "user", "octocat"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_cli_invalid_state_fails() {
    let output = run_cli(&["pulls", "octo/hello", "--state", "merged"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("state must be one of"));
}

#[test]
fn test_cli_invalid_repository_fails() {
    let output = run_cli(&["repo", "not-a-repo"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid value 'not-a-repo' for repository"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_user_json_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
            "html_url": "https://github.com/octocat"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, &server);

    let output = tokio::task::spawn_blocking(move || {
        run_cli(&["-c", &config_path, "--json", "user", "octocat"])
    })
    .await
    .unwrap();

    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    let user: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(user["username"], "octocat");
    assert_eq!(user["name"], "The Octocat");
    assert_eq!(user["url"], "https://github.com/octocat");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_api_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let config_path = config_for(&temp_dir, &server);

    let output = tokio::task::spawn_blocking(move || {
        run_cli(&["-c", &config_path, "repo", "octo/missing"])
    })
    .await
    .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error 404: Not Found"));
}
