mod common;

use assert_cmd::prelude::*;
use common::spawn_stub;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn pwgauge(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pwgauge").unwrap();
    cmd.env("PWGAUGE_CONFIG_DIR", root.join("cfg"))
        .env("PWGAUGE_DATA_DIR", root.join("data"))
        .env_remove("PWGAUGE_SERVER_URL")
        .env_remove("PWGAUGE_STORAGE_PATH")
        .env_remove("PWGAUGE_MAX_TIME_TO_CRACK")
        .env_remove("PWGAUGE_AUTO_SCROLL");
    cmd
}

fn analysis_body(score: u32) -> String {
    json!({
        "score": score,
        "strength": "Strong",
        "length": 10,
        "has_uppercase": true,
        "has_lowercase": true,
        "has_digits": true,
        "has_special": true,
        "entropy": 65.5,
        "time_to_crack": "centuries",
        "feedback": ["Consider using a longer password"]
    })
    .to_string()
}

#[test]
fn version_reports_build_metadata() {
    let td = tempdir().unwrap();
    pwgauge(td.path()).arg("--version").assert().success().stdout(
        predicate::str::contains("version:")
            .and(predicate::str::contains("git sha:"))
            .and(predicate::str::contains("build time (UTC):"))
            .and(predicate::str::contains("target:")),
    );
}

#[test]
fn key_set_then_show_masked_and_revealed() {
    let td = tempdir().unwrap();

    pwgauge(td.path())
        .args(["key", "set", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("API key saved successfully!"));

    let storage = td.path().join("data").join("pwgauge").join("storage.json");
    let map: Value = serde_json::from_slice(&fs::read(storage).unwrap()).unwrap();
    assert_eq!(map, json!({ "gemini_api_key": "abc123" }));

    pwgauge(td.path())
        .args(["key", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abc1**").and(predicate::str::contains("abc123").not()));

    pwgauge(td.path())
        .args(["key", "show", "--reveal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abc123"));
}

#[test]
fn blank_key_is_rejected_and_not_stored() {
    let td = tempdir().unwrap();

    pwgauge(td.path())
        .args(["key", "set", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid API key"));

    assert!(!td.path().join("data").join("pwgauge").join("storage.json").exists());
    pwgauge(td.path())
        .args(["key", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No API key stored."));
}

#[test]
fn empty_password_fails_without_contacting_server() {
    let td = tempdir().unwrap();
    pwgauge(td.path())
        .args(["analyze", "", "--server", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a password to analyze"));
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_prints_report_and_forwards_stored_key() {
    let server = spawn_stub(vec![("POST", "/analyze", 200, analysis_body(72))]).await;
    let td = tempdir().unwrap();

    pwgauge(td.path()).args(["key", "set", "abc123"]).assert().success();

    pwgauge(td.path())
        .args(["analyze", "Password1!", "--server", server.url.as_str()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Score: 72/100 (Strong)")
                .and(predicate::str::contains("#2ecc71"))
                .and(predicate::str::contains("Time to crack: centuries"))
                .and(predicate::str::contains("  • Consider using a longer password")),
        );

    let reqs = server.requests.lock().unwrap().clone();
    let body: Value = serde_json::from_str(&reqs[0].body).unwrap();
    assert_eq!(body, json!({ "password": "Password1!", "api_key": "abc123" }));
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_json_outputs_results_area() {
    let server = spawn_stub(vec![("POST", "/analyze", 200, analysis_body(90))]).await;
    let td = tempdir().unwrap();

    let out = pwgauge(td.path())
        .args(["analyze", "pw", "--json", "--server", server.url.as_str()])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["visible"], json!(true));
    assert_eq!(v["card"]["score"], json!("90"));
    assert_eq!(v["card"]["gauge"]["band"], json!("dark-green"));
    assert_eq!(v["feedback"].as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_analysis_reports_generic_message() {
    let server = spawn_stub(vec![(
        "POST",
        "/analyze",
        400,
        json!({ "error": "Password is required" }).to_string(),
    )])
    .await;
    let td = tempdir().unwrap();

    pwgauge(td.path())
        .args(["analyze", "pw", "--server", server.url.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "An unexpected error occurred. Please try again.",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn bootstrap_prints_server_message() {
    let server = spawn_stub(vec![(
        "GET",
        "/create-sample-data",
        200,
        json!({ "message": "Sample data created successfully" }).to_string(),
    )])
    .await;
    let td = tempdir().unwrap();

    pwgauge(td.path())
        .args(["bootstrap", "--server", server.url.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample data created successfully"));
}

#[test]
fn config_path_honors_config_dir() {
    let td = tempdir().unwrap();
    let expected = td.path().join("cfg").join("pwgauge").join("config.toml");
    pwgauge(td.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.to_string_lossy().to_string()));
}
