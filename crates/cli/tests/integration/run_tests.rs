//! Run command tests.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::ratelab_cmd;

#[test]
fn test_run_table_output() {
    ratelab_cmd()
        .args(["run", "--weeks", "1", "--period", "86400", "--precision", "64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every 86400 seconds"))
        .stdout(predicate::str::contains("Total Borrow"))
        .stdout(predicate::str::contains("Final Borrow"))
        .stdout(predicate::str::contains("Steps:        7"));
}

#[test]
fn test_run_json_output() {
    let assert = ratelab_cmd()
        .args([
            "run",
            "--weeks",
            "1",
            "--period",
            "302400",
            "--precision",
            "64",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(doc["name"], "Every 302400 seconds");
    assert_eq!(doc["duration"], 604_800);
    assert_eq!(doc["period"], 302_400);
    assert_eq!(doc["steps"], 2);
    assert_eq!(doc["precision"], 64);
    assert_eq!(doc["initialRate"], "200%");

    let history = doc["history"].as_array().unwrap();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0]["time"], 0);
    assert_eq!(history[2]["time"], 604_800);

    // Balances are serialized as decimal strings
    let first = history[0]["totalBorrow"].as_str().unwrap();
    assert!(first.starts_with("0.90000005707762738"));
}

#[test]
fn test_run_samples_limit_rows() {
    let assert = ratelab_cmd()
        .args([
            "run",
            "--weeks",
            "1",
            "--period",
            "3600",
            "--precision",
            "32",
            "--samples",
            "5",
            "--format",
            "json",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(doc["steps"], 168);
    let history = doc["history"].as_array().unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0]["time"], 0);
    assert_eq!(history[4]["time"], 604_800);
}
