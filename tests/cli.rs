//! End-to-end CLI tests
//!
//! Drives the fincheck binary the way a user would: snapshots from files
//! and stdin, JSON output, sample piping, and theme persistence. Every
//! invocation points FINCHECK_DATA_DIR at a scratch directory so the real
//! config is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fincheck(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincheck").unwrap();
    cmd.env("FINCHECK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn score_balanced_sample_file() {
    let dir = TempDir::new().unwrap();

    let sample = fincheck(&dir)
        .args(["sample", "balanced"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let snapshot_path = dir.path().join("balanced.json");
    std::fs::write(&snapshot_path, sample).unwrap();

    fincheck(&dir)
        .arg("score")
        .arg(&snapshot_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("100"))
        .stdout(predicate::str::contains("Financial Freedom! Excellent job."))
        .stdout(predicate::str::contains("Spending by Category"));
}

#[test]
fn score_reads_stdin() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .arg("score")
        .write_stdin(r#"{"inc-salary": 12000, "freq-salary": 12}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Net Income"))
        .stdout(predicate::str::contains("$1000.00"));
}

#[test]
fn score_json_output_is_machine_readable() {
    let dir = TempDir::new().unwrap();

    let output = fincheck(&dir)
        .args(["score", "--json"])
        .write_stdin(
            r#"{
                "inc-salary": 1000, "freq-salary": 1,
                "exp-mortgage": 500, "freq-mortgage": 1,
                "exp-meals": 300, "freq-meals": 1,
                "exp-401k": 200, "freq-401k": 1
            }"#,
        )
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["score"], 100);
    assert_eq!(summary["net_income"], 100000);
    assert_eq!(summary["categories"]["housing"], 50000);
    assert_eq!(
        summary["tips"][0],
        "Your 50/30/20 balance looks good. Keep it up!"
    );
}

#[test]
fn score_accepts_set_overrides_without_stdin() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .args([
            "score",
            "--set",
            "inc-salary=1000",
            "--set",
            "freq-salary=1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("100"));
}

#[test]
fn score_guard_without_income() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .args(["score", "--set", "exp-rental=1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter Income to start"));
}

#[test]
fn malformed_fields_warn_but_still_score() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .arg("score")
        .write_stdin(r#"{"inc-salary": "lots", "inc-pension": 2000, "freq-pension": 1}"#)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning: field 'inc-salary'"))
        .stdout(predicate::str::contains("$2000.00"));
}

#[test]
fn strict_mode_rejects_malformed_fields() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .args(["score", "--strict"])
        .write_stdin(r#"{"inc-salary": "lots"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not be read as numbers"));
}

#[test]
fn fields_lists_canonical_map() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("exp-mortgage"))
        .stdout(predicate::str::contains("freq-mortgage"))
        .stdout(predicate::str::contains("inc-tax"))
        .stdout(predicate::str::contains("Savings"));
}

#[test]
fn sample_pipes_into_score() {
    let dir = TempDir::new().unwrap();

    let sample = fincheck(&dir)
        .args(["sample", "stretched"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    fincheck(&dir)
        .arg("score")
        .write_stdin(sample)
        .assert()
        .success()
        .stdout(predicate::str::contains("Action Needed! You are overspending."));
}

#[test]
fn unknown_sample_fails_with_choices() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .args(["sample", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("starter, balanced, stretched"));
}

#[test]
fn theme_preference_persists_between_runs() {
    let dir = TempDir::new().unwrap();

    fincheck(&dir)
        .args(["theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));

    fincheck(&dir)
        .arg("theme")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current theme: light"));

    fincheck(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::is_match("Theme: +light").unwrap());
}

#[test]
fn no_savings_slice_flag_drops_chart_row() {
    let dir = TempDir::new().unwrap();
    let input = r#"{
        "inc-salary": 3000, "freq-salary": 1,
        "exp-rental": 1000, "freq-rental": 1,
        "exp-401k": 500, "freq-401k": 1
    }"#;

    fincheck(&dir)
        .args(["score", "--no-savings-slice"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Housing"))
        // The allocation-bar legend still says "Savings"; the chart row
        // with the contribution amount must be gone
        .stdout(predicate::str::contains("$500.00").not());
}
