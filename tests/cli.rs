//! End-to-end tests for the endpoint-patch binary.
//!
//! These exercise the full CLI contract: usage policy, status lines,
//! per-file reporting, and the always-zero exit code.

use assert_cmd::Command;
use predicates::prelude::*;

const LOOPBACK: &str = "http://localhost:3030/chad-kg/sparql";
const NEW_ENDPOINT: &str = "https://kg.example.org/sparql";

fn bin() -> Command {
    Command::cargo_bin("endpoint-patch").unwrap()
}

#[test]
fn missing_argument_prints_usage_and_exits_zero() {
    bin()
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Usage: endpoint-patch <new_endpoint> [root]",
        ));
}

#[test]
fn patches_a_tree_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("query.js");
    std::fs::write(&file, format!("const endpoint = \"{}\";", LOOPBACK)).unwrap();

    bin()
        .arg(NEW_ENDPOINT)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Patching SPARQL endpoint to: {}",
            NEW_ENDPOINT
        )))
        .stdout(predicate::str::contains("Patched: "))
        .stdout(predicate::str::contains("Patch complete."));

    let content = std::fs::read_to_string(&file).unwrap();
    assert_eq!(content, format!("const endpoint = \"{}\";", NEW_ENDPOINT));
}

#[test]
fn missing_root_still_reports_start_and_end() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("does-not-exist");

    bin()
        .arg(NEW_ENDPOINT)
        .arg(&gone)
        .assert()
        .success()
        .stdout(predicate::str::contains("Patching SPARQL endpoint to:"))
        .stdout(predicate::str::contains("Patch complete."))
        .stdout(predicate::str::contains("Patched: ").not());
}

#[test]
fn non_matching_files_are_never_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("plain.js"), "no endpoints here").unwrap();
    std::fs::write(dir.path().join("notes.txt"), LOOPBACK).unwrap();

    bin()
        .arg(NEW_ENDPOINT)
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Patched: ").not());

    // Content matching an endpoint form under a disallowed extension survives
    let untouched = std::fs::read_to_string(dir.path().join("notes.txt")).unwrap();
    assert_eq!(untouched, LOOPBACK);
}
