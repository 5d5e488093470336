//! End-to-end tests for the `lexes` binary: stdin/stdout, `--input`/
//! `--output` file round-trips, and exit codes.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn lexes() -> Command {
    Command::cargo_bin("lexes").unwrap()
}

#[test]
fn translates_from_stdin_to_stdout() {
    lexes()
        .write_stdin("cat or dog")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"should\""))
        .stdout(predicate::str::contains("\"cat\""))
        .stdout(predicate::str::contains("\"dog\""));
}

#[test]
fn reads_input_file_and_writes_output_file() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "breach and damages").unwrap();
    let output = NamedTempFile::new().unwrap();

    lexes()
        .arg("--input")
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let contents = std::fs::read_to_string(output.path()).unwrap();
    assert!(contents.contains("\"must\""));
    assert!(contents.contains("\"breach\""));
}

#[test]
fn highlight_flag_adds_highlight_block() {
    lexes()
        .arg("--highlight")
        .write_stdin("foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"highlight\""))
        .stdout(predicate::str::contains("\"plain_text\""));
}

#[test]
fn custom_field_is_applied_to_leaves() {
    lexes()
        .arg("--field")
        .arg("body")
        .write_stdin("foo")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"body\": \"foo\""));
}

#[test]
fn no_operators_rejects_adjacent_terms_without_connector() {
    lexes()
        .arg("--no-operators")
        .write_stdin("foo bar")
        .assert()
        .failure();
}

#[test]
fn unmatched_close_paren_is_a_nonzero_exit() {
    lexes().write_stdin("foo)").assert().failure();
}

#[test]
fn operators_and_no_operators_conflict_at_the_cli() {
    lexes()
        .arg("--operators")
        .arg("--no-operators")
        .write_stdin("foo")
        .assert()
        .failure();
}
