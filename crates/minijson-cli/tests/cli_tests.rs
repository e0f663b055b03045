//! Integration tests for the `minijson` binary.
//!
//! Uses `assert_cmd` and `predicates` to exercise the print, get, and demo
//! subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, and error paths.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn minijson() -> Command {
    Command::cargo_bin("minijson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Print subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn print_stdin_to_stdout() {
    minijson()
        .arg("print")
        .write_stdin(r#"{"name": "Alice", "age": 30}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "Alice""#))
        .stdout(predicate::str::contains(r#""age": 30"#));
}

#[test]
fn print_normalizes_permissive_input() {
    minijson()
        .arg("print")
        .write_stdin("[1 2 3,]")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1, 2, 3]"));
}

#[test]
fn print_file_to_stdout() {
    minijson()
        .args(["print", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""stars": 42"#));
}

#[test]
fn print_file_to_file() {
    let out_path = std::env::temp_dir().join("minijson_cli_print_output.json");
    let _ = std::fs::remove_file(&out_path);

    minijson()
        .args(["print", "-i", sample_json_path(), "-o"])
        .arg(&out_path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).expect("output file must exist");
    assert!(written.contains(r#""stable": true"#), "got: {written}");
    let _ = std::fs::remove_file(&out_path);
}

#[test]
fn print_rejects_malformed_input() {
    minijson()
        .arg("print")
        .write_stdin(r#"{"a" 1}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse input"));
}

#[test]
fn print_rejects_negative_numbers() {
    minijson()
        .arg("print")
        .write_stdin("[-1]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn print_missing_input_file_fails() {
    minijson()
        .args(["print", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Get subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_scalar_member() {
    minijson()
        .args(["get", "stars", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn get_container_member_prints_compact_form() {
    minijson()
        .args(["get", "object", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"a": "alpha", "b": "beta"}"#));
}

#[test]
fn get_missing_member_fails() {
    minijson()
        .args(["get", "absent", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no member named 'absent'"));
}

#[test]
fn get_from_stdin() {
    minijson()
        .args(["get", "k"])
        .write_stdin(r#"{"k": [true, null]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[true, null]"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Demo subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn demo_prints_the_showcase_document() {
    minijson()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""number": 42"#))
        .stdout(predicate::str::contains(r#""string": "Hello, World!""#))
        .stdout(predicate::str::contains("[true, 42, \"Hello, World!\", {}, []]"));
}

#[test]
fn demo_output_reparses() {
    let output = minijson().arg("demo").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value = minijson_core::parse(&stdout).expect("demo output must parse");
    assert_eq!(value.get_number("number"), 42);
    assert_eq!(value.get("array").unwrap().len(), 5);
}
