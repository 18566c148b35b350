//! Compare command tests.

use predicates::prelude::*;
use serde_json::Value;

use super::helpers::ratelab_cmd;

#[test]
fn test_compare_writes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("compounds.json");

    ratelab_cmd()
        .args([
            "compare",
            "--weeks",
            "1",
            "--periods",
            "604800,302400",
            "--precision",
            "64",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Full Duration"))
        .stdout(predicate::str::contains("Wrote"));

    let body = std::fs::read_to_string(&out).unwrap();
    let doc: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(doc["initialRate"], "200%");
    assert_eq!(doc["baseRunName"], "Full Duration");

    let runs = doc["runs"].as_object().unwrap();
    assert!(runs.contains_key("Full Duration"));
    assert!(runs.contains_key("Every 604800 seconds"));
    assert!(runs.contains_key("Every 302400 seconds"));

    // Two half-week accruals plus the seed sample
    let halves = runs["Every 302400 seconds"].as_array().unwrap();
    assert_eq!(halves.len(), 3);
    assert_eq!(halves[0]["time"], 0);
    assert_eq!(halves[0]["v"], "9000000.57078");
    assert_eq!(halves[2]["time"], 604_800);

    // A one-week run at a one-week period is the base run's first week
    let base = runs["Full Duration"].as_array().unwrap();
    let weekly = runs["Every 604800 seconds"].as_array().unwrap();
    assert_eq!(base[1]["v"], weekly[1]["v"]);
}

#[test]
fn test_compare_base_has_one_sample_per_week() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("compounds.json");

    ratelab_cmd()
        .args([
            "compare",
            "--weeks",
            "3",
            "--periods",
            "604800",
            "--precision",
            "64",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let body = std::fs::read_to_string(&out).unwrap();
    let doc: Value = serde_json::from_str(&body).unwrap();

    let base = doc["runs"]["Full Duration"].as_array().unwrap();
    assert_eq!(base.len(), 4);
    for (i, point) in base.iter().enumerate() {
        assert_eq!(point["time"], i as u64 * 604_800);
    }
}

#[test]
fn test_compare_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("compounds.json");

    ratelab_cmd()
        .args([
            "compare",
            "--weeks",
            "1",
            "--periods",
            "604800",
            "--precision",
            "64",
            "--format",
            "json",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"initialRate\": \"200%\""))
        .stdout(predicate::str::contains("\"baseRunName\": \"Full Duration\""));
}

#[test]
fn test_compare_custom_initial_rate() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("compounds.json");

    ratelab_cmd()
        .args([
            "compare",
            "--weeks",
            "1",
            "--periods",
            "604800",
            "--precision",
            "64",
            "--initial-rate",
            "0.5",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success();

    let body = std::fs::read_to_string(&out).unwrap();
    let doc: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(doc["initialRate"], "50%");
}

#[test]
fn test_compare_period_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("compounds.json");

    ratelab_cmd()
        .args([
            "compare",
            "--weeks",
            "10",
            "--periods",
            "1000000,600000,200000,20000",
            "--precision",
            "32",
            "--out",
            out.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every 1M seconds"))
        .stdout(predicate::str::contains("Every 600k seconds"))
        .stdout(predicate::str::contains("Every 200k seconds"))
        .stdout(predicate::str::contains("Every 20k seconds"));

    let body = std::fs::read_to_string(&out).unwrap();
    let doc: Value = serde_json::from_str(&body).unwrap();
    let runs = doc["runs"].as_object().unwrap();
    assert_eq!(runs.len(), 5);

    // 6048000 seconds split into 20k periods is 302 whole steps
    let finest = runs["Every 20k seconds"].as_array().unwrap();
    assert_eq!(finest.len(), 303);
    assert_eq!(finest[302]["time"], 6_040_000);
}
