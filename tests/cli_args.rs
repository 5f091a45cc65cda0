//! Tests for the headless `check` command, run against the built binary.

use newscheck::analysis::{AnalysisResult, FAKE_EXPLANATION};
use newscheck::error::AnalyzeError;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Command with logging disabled and no simulated wait.
fn newscheck_cmd(dir: &TempDir) -> Command {
    let config = quiet_config(dir);
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_newscheck"));
    cmd.arg("--config")
        .arg(config)
        .arg("--latency-ms")
        .arg("0")
        .stdin(Stdio::null());
    cmd
}

fn quiet_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, "[logging]\nenabled = false\n").expect("Failed to write config");
    path
}

#[test]
fn test_empty_input_exit_code() {
    assert_eq!(AnalyzeError::EmptyInput.exit_code(), 2);
}

#[test]
fn test_blank_text_exits_with_code_2() {
    let dir = TempDir::new().unwrap();
    let output = newscheck_cmd(&dir)
        .args(["check", "   "])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter some text to analyze"));
}

#[test]
fn test_empty_stdin_exits_with_code_2() {
    let dir = TempDir::new().unwrap();
    let output = newscheck_cmd(&dir)
        .arg("check")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_output_has_result_fields() {
    let dir = TempDir::new().unwrap();
    let output = newscheck_cmd(&dir)
        .args(["--seed", "7", "check", "--json", "Shocking claims about the mayor"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["is_fake"], serde_json::Value::Bool(true));
    let confidence = value["confidence"].as_u64().expect("confidence is a number");
    assert!((75..=94).contains(&confidence));
    assert_eq!(value["analysis"].as_str(), Some(FAKE_EXPLANATION));
}

#[test]
fn test_text_output_shows_label_and_confidence() {
    let dir = TempDir::new().unwrap();
    let output = newscheck_cmd(&dir)
        .args(["check", "You won't believe this one weird trick"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fake News Detected"));
    assert!(stdout.contains("Classification: Fake"));
    assert!(stdout.contains("Confidence: "));
    assert!(stdout.contains(FAKE_EXPLANATION));
}

#[test]
fn test_result_serializes_expected_field_names() {
    let result = AnalysisResult {
        is_fake: false,
        confidence: 80,
        analysis: "ok".to_string(),
    };
    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["analysis", "confidence", "is_fake"]);
    assert_eq!(result.classification(), "Real");
}
