//! End-to-end tests for the deptrack binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn resolves_input_file_to_stdout() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deps.txt");
    fs::write(&input, "X depends on Y R\nY depends on Z\n").unwrap();

    Command::cargo_bin("deptrack")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout("X depends on R Y Z\nY depends on Z\n");
}

#[test]
fn resolves_cyclic_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("cycle.txt");
    fs::write(
        &input,
        "A depends on B\nB depends on C\nC depends on D\nD depends on E\nE depends on A\n",
    )
    .unwrap();

    Command::cargo_bin("deptrack")
        .unwrap()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A depends on B C D E\n"));
}

#[test]
fn missing_input_file_fails_with_its_path() {
    Command::cargo_bin("deptrack")
        .unwrap()
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.txt"));
}

#[test]
fn malformed_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "A is friends with B\n").unwrap();

    Command::cargo_bin("deptrack")
        .unwrap()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed line"));
}

#[test]
fn missing_argument_shows_usage() {
    Command::cargo_bin("deptrack")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
