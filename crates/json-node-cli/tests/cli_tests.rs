//! Integration tests for the `jnode` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the describe,
//! equal, get and normalize subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, exit statuses and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn jnode() -> Command {
    Command::cargo_bin("jnode").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// describe
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn describe_stdin() {
    jnode()
        .arg("describe")
        .write_stdin(r#"{"b":"x","a":1}"#)
        .assert()
        .success()
        .stdout("Object({\"a\": Number(1), \"b\": String(x)})\n");
}

#[test]
fn describe_empty_array() {
    jnode()
        .arg("describe")
        .write_stdin("[]")
        .assert()
        .success()
        .stdout("Array([])\n");
}

#[test]
fn describe_file_renders_booleans_as_null() {
    jnode()
        .args(["describe", "-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""active": Null"#))
        .stdout(predicate::str::contains(
            r#""tags": Array([String(rust), String(json)])"#,
        ));
}

#[test]
fn describe_invalid_json_fails() {
    jnode()
        .arg("describe")
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON from stdin"));
}

#[test]
fn describe_missing_file_fails() {
    jnode()
        .args(["describe", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// equal
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn equal_ignores_key_order_and_numeric_form() {
    jnode()
        .args([
            "equal",
            &fixture("sample.json"),
            &fixture("sample_reordered.json"),
        ])
        .assert()
        .success()
        .stdout("equal\n");
}

#[test]
fn equal_detects_changed_scalar() {
    jnode()
        .args([
            "equal",
            &fixture("sample.json"),
            &fixture("sample_changed.json"),
        ])
        .assert()
        .code(1)
        .stdout("different\n");
}

#[test]
fn equal_missing_file_exits_with_error_status() {
    jnode()
        .args(["equal", &fixture("sample.json"), "/nonexistent/right.json"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn equal_invalid_json_exits_with_error_status() {
    let dir = std::env::temp_dir().join(format!("jnode-equal-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();

    jnode()
        .args(["equal", &fixture("sample.json"), bad.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse JSON from file"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn equal_same_file() {
    let path = fixture("sample.json");
    jnode()
        .args(["equal", &path, &path])
        .assert()
        .success()
        .stdout("equal\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_nested_key() {
    jnode()
        .args(["get", "address.city", "-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout("String(Lisbon)\n");
}

#[test]
fn get_array_index() {
    jnode()
        .args(["get", "tags.1", "-i", &fixture("sample.json")])
        .assert()
        .success()
        .stdout("String(json)\n");
}

#[test]
fn get_missing_path_fails() {
    jnode()
        .args(["get", "address.country", "-i", &fixture("sample.json")])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No node at path: 'address.country'"));
}

// ─────────────────────────────────────────────────────────────────────────────
// normalize
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn normalize_stdin_to_stdout() {
    let output = jnode()
        .arg("normalize")
        .write_stdin(r#"{"b": true, "a": [1, 2.5, "s"]}"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({"a": [1, 2.5, "s"], "b": null}));
}

#[test]
fn normalize_file_to_file() {
    let dir = std::env::temp_dir().join(format!("jnode-normalize-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let out_path = dir.join("out.json");

    jnode()
        .args([
            "normalize",
            "-i",
            &fixture("sample.json"),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["active"], serde_json::Value::Null);
    assert_eq!(value["address"]["city"], "Lisbon");

    std::fs::remove_dir_all(&dir).unwrap();
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    jnode()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("describe"))
        .stdout(predicate::str::contains("equal"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    jnode().assert().failure().code(2);
}
