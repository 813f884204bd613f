// Integration tests for the castor command-line driver

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    format!("{}/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Fresh per-test output directory under the system temp dir.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("castor-{}-{}", test, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

// ============================================================================
// Single-File Mode
// ============================================================================

#[test]
fn single_file_prints_json() {
    let mut cmd = Command::cargo_bin("castor").unwrap();
    let assert = cmd.arg(fixture("simple.c")).assert();
    assert
        .success()
        .stdout(predicate::str::contains(r#""kind": "Program""#))
        .stdout(predicate::str::contains(r#""kind": "Function""#))
        .stdout(predicate::str::contains(r#""value": "main""#));
}

#[test]
fn single_file_output_is_valid_json() {
    let mut cmd = Command::cargo_bin("castor").unwrap();
    let output = cmd.arg(fixture("globals.c")).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["kind"], "Program");
    assert_eq!(value["children"].as_array().unwrap().len(), 4);
}

#[test]
fn single_file_syntax_error_exits_nonzero() {
    let mut cmd = Command::cargo_bin("castor").unwrap();
    let assert = cmd.arg(fixture("syntax_error.c")).assert();
    assert
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Syntax error at line 2, column 11: Expected ';' after declaration, found '='",
        ));
}

#[test]
fn single_file_missing_input() {
    let mut cmd = Command::cargo_bin("castor").unwrap();
    let assert = cmd.arg(fixture("no_such_file.c")).assert();
    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading file"));
}

// ============================================================================
// Directory Mode
// ============================================================================

#[test]
fn directory_mode_reports_each_file() {
    let out_dir = scratch_dir("progress");
    let mut cmd = Command::cargo_bin("castor").unwrap();
    let assert = cmd
        .arg(format!("{}/fixtures", env!("CARGO_MANIFEST_DIR")))
        .arg("-o")
        .arg(&out_dir)
        .assert();

    // One line per file, sorted by name; failures do not stop the run or
    // change the exit code.
    assert.success().stdout(
        "Parsed control_flow.c -> OK\n\
         Parsed expressions.c -> OK\n\
         Parsed globals.c -> OK\n\
         Parsed simple.c -> OK\n\
         Parsed syntax_error.c -> ERROR: Syntax error at line 2, column 11: \
         Expected ';' after declaration, found '='\n",
    );

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn directory_mode_writes_ast_and_error_files() {
    let out_dir = scratch_dir("outputs");
    let mut cmd = Command::cargo_bin("castor").unwrap();
    cmd.arg(format!("{}/fixtures", env!("CARGO_MANIFEST_DIR")))
        .arg("--output")
        .arg(&out_dir)
        .assert()
        .success();

    let json_text =
        fs::read_to_string(out_dir.join("simple.c.ast.json")).expect("AST file should exist");
    let value: serde_json::Value =
        serde_json::from_str(&json_text).expect("AST file should be valid JSON");
    assert_eq!(value["kind"], "Program");

    let error_text = fs::read_to_string(out_dir.join("syntax_error.c.error.txt"))
        .expect("Error file should exist");
    assert!(error_text.contains("Expected ';' after declaration"));

    // A failed parse never leaves a stale AST file behind
    assert!(!out_dir.join("syntax_error.c.ast.json").exists());
    assert!(out_dir.join("control_flow.c.ast.json").exists());
    assert!(out_dir.join("expressions.c.ast.json").exists());
    assert!(out_dir.join("globals.c.ast.json").exists());

    let _ = fs::remove_dir_all(&out_dir);
}

#[test]
fn directory_mode_missing_input_dir() {
    let out_dir = scratch_dir("missing");
    let mut cmd = Command::cargo_bin("castor").unwrap();
    // A nonexistent path is treated as a file path, not a directory
    let assert = cmd
        .arg(format!("{}/no_such_dir", env!("CARGO_MANIFEST_DIR")))
        .arg("-o")
        .arg(&out_dir)
        .assert();
    assert
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error reading file"));
}
