use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("dataset-report").unwrap()
}

#[test]
fn test_help_succeeds_without_dialog() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dataset Report Generator"));
}

#[test]
fn test_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dataset-report"));
}

#[test]
fn test_unknown_flag_fails() {
    cmd().arg("--definitely-not-a-flag").assert().failure();
}
