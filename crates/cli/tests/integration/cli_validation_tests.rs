//! CLI argument validation tests.
//!
//! These tests verify that the CLI properly validates arguments and provides
//! helpful error messages.

use predicates::prelude::*;

use super::helpers::ratelab_cmd;

#[test]
fn test_help_output() {
    ratelab_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ratelab"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn test_compare_help_output() {
    ratelab_cmd()
        .args(["compare", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--weeks"))
        .stdout(predicate::str::contains("--periods"))
        .stdout(predicate::str::contains("--precision"))
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn test_run_help_output() {
    ratelab_cmd()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--period"))
        .stdout(predicate::str::contains("--samples"));
}

#[test]
fn test_invalid_command() {
    ratelab_cmd()
        .arg("invalid_command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_run_missing_period() {
    ratelab_cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_invalid_output_format() {
    ratelab_cmd()
        .args(["run", "--period", "604800", "--format", "invalid_format"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_zero_precision_rejected() {
    ratelab_cmd()
        .args(["run", "--period", "604800", "--precision", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_run_rejects_zero_period() {
    ratelab_cmd()
        .args(["run", "--weeks", "1", "--period", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_run_rejects_period_longer_than_duration() {
    ratelab_cmd()
        .args(["run", "--weeks", "1", "--period", "700000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("longer than"));
}

#[test]
fn test_compare_rejects_zero_period() {
    ratelab_cmd()
        .args(["compare", "--weeks", "1", "--periods", "604800,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn test_compare_rejects_period_longer_than_duration() {
    ratelab_cmd()
        .args(["compare", "--weeks", "1", "--periods", "700000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("longer than"));
}
