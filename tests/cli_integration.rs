//! Integration tests for the carted CLI
//!
//! These tests exercise the full CLI workflow using a temporary store
//! file. They verify that commands work end-to-end without mocking.

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to run carted with a specific store path
fn run_carted(args: &[&str], store_path: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_carted"))
        .args(args)
        .env("CARTED_STORE_PATH", store_path)
        .output()
        .expect("Failed to execute carted")
}

/// Helper to get stdout as string
fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Extract the id printed by `add` ("Item added successfully (<id>)")
fn added_id(output: &std::process::Output) -> String {
    let out = stdout(output);
    let start = out.find('(').expect("add output should contain an id") + 1;
    let end = out.find(')').expect("add output should contain an id");
    out[start..end].to_string()
}

// =============================================================================
// Basic Command Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_carted"))
        .arg("--help")
        .output()
        .expect("Failed to execute");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("carted"));
    assert!(out.contains("grocery list"));
}

#[test]
fn test_version_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_carted"))
        .arg("--version")
        .output()
        .expect("Failed to execute");

    assert!(output.status.success());
    assert!(stdout(&output).contains("carted"));
}

// =============================================================================
// Shell Completion Tests
// =============================================================================

#[test]
fn test_completion_zsh() {
    let output = Command::new(env!("CARGO_BIN_EXE_carted"))
        .args(["completion", "zsh"])
        .output()
        .expect("Failed to execute");

    assert!(
        output.status.success(),
        "completion zsh failed: {}",
        stderr(&output)
    );
    assert!(
        stdout(&output).contains("#compdef carted"),
        "zsh completion should contain #compdef"
    );
}

#[test]
fn test_completion_bash() {
    let output = Command::new(env!("CARGO_BIN_EXE_carted"))
        .args(["completion", "bash"])
        .output()
        .expect("Failed to execute");

    assert!(
        output.status.success(),
        "completion bash failed: {}",
        stderr(&output)
    );
    assert!(
        stdout(&output).contains("_carted"),
        "bash completion should contain _carted function"
    );
}

// =============================================================================
// Item CRUD Tests
// =============================================================================

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let output = run_carted(&["add", "milk"], &store_path);
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    assert!(stdout(&output).contains("Item added successfully"));

    let output = run_carted(&["list"], &store_path);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("milk"));
    assert!(out.contains("Not Added to Cart"));
}

#[test]
fn test_add_joins_words_and_trims() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let output = run_carted(&["add", "oat", "milk"], &store_path);
    assert!(output.status.success());

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("oat milk"));
}

#[test]
fn test_add_empty_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let output = run_carted(&["add", "   "], &store_path);
    assert!(!output.status.success(), "blank add should fail");
    assert!(stderr(&output).contains("Please enter an item"));

    // No store write happened
    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("No task found"));
}

#[test]
fn test_add_truncates_long_text() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let long = "x".repeat(30);
    let output = run_carted(&["add", &long], &store_path);
    assert!(output.status.success());

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains(&format!("{}...", "x".repeat(20))));
    assert!(!out.contains(&long));
}

#[test]
fn test_list_empty_shows_placeholder() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let output = run_carted(&["list"], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No task found"));
}

#[test]
fn test_edit_item() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let id = added_id(&run_carted(&["add", "milk"], &store_path));

    let output = run_carted(&["edit", &id, "eggs"], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Item updated successfully"));

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("eggs"));
    assert!(!out.contains("milk"));
}

#[test]
fn test_edit_missing_id_is_silent_noop() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    run_carted(&["add", "milk"], &store_path);

    let output = run_carted(&["edit", "nonexistent", "x"], &store_path);
    assert!(
        output.status.success(),
        "missing id is absorbed, not an error"
    );
    assert!(!stdout(&output).contains("updated"));

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("milk"));
}

#[test]
fn test_toggle_and_filter() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let id = added_id(&run_carted(&["add", "milk"], &store_path));
    run_carted(&["add", "eggs"], &store_path);

    let output = run_carted(&["toggle", &id], &store_path);
    assert!(output.status.success());

    let added = stdout(&run_carted(&["list", "--status", "added"], &store_path));
    assert!(added.contains("milk"));
    assert!(!added.contains("eggs"));

    let not_added = stdout(&run_carted(
        &["list", "--status", "not-added"],
        &store_path,
    ));
    assert!(not_added.contains("eggs"));
    assert!(!not_added.contains("milk"));
}

#[test]
fn test_toggle_twice_restores_status() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let id = added_id(&run_carted(&["add", "milk"], &store_path));
    run_carted(&["toggle", &id], &store_path);
    run_carted(&["toggle", &id], &store_path);

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("Not Added to Cart"));
}

#[test]
fn test_delete_item() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let id = added_id(&run_carted(&["add", "milk"], &store_path));
    run_carted(&["add", "eggs"], &store_path);

    let output = run_carted(&["delete", &id], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Item deleted successfully"));

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(!out.contains("milk"));
    assert!(out.contains("eggs"));
}

#[test]
fn test_clear_all() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    run_carted(&["add", "milk"], &store_path);
    run_carted(&["add", "eggs"], &store_path);

    let output = run_carted(&["clear"], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("All items cleared successfully"));

    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("No task found"));
}

#[test]
fn test_clear_on_empty_still_reports_success() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let output = run_carted(&["clear"], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("All items cleared successfully"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_state_survives_between_invocations() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    let id = added_id(&run_carted(&["add", "apples"], &store_path));
    run_carted(&["add", "bread"], &store_path);
    run_carted(&["toggle", &id], &store_path);

    // Each invocation is a fresh process restoring from the slot
    let added = stdout(&run_carted(&["list", "--status", "added"], &store_path));
    assert!(added.contains("apples"));
    assert!(added.contains("Added to Cart"));
    assert!(!added.contains("bread"));
}

#[test]
fn test_corrupt_store_treated_as_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");
    std::fs::write(&store_path, "{{{ not json").expect("write corrupt slot");

    let output = run_carted(&["list"], &store_path);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No task found"));

    // Adding over a corrupt slot starts fresh
    let output = run_carted(&["add", "milk"], &store_path);
    assert!(output.status.success());
    let out = stdout(&run_carted(&["list"], &store_path));
    assert!(out.contains("milk"));
}

#[test]
fn test_store_slot_is_json_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("items.json");

    run_carted(&["add", "milk"], &store_path);

    let raw = std::fs::read_to_string(&store_path).expect("slot should exist");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("slot should be JSON");
    let arr = value.as_array().expect("slot should be an array");
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["item"], "milk");
    assert_eq!(arr[0]["completed"], false);
    assert_eq!(arr[0]["status"], "Not Added to Cart");
}
