//! Integration tests for the records workflow

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn checkup() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("checkup"))
}

fn write_profile_ruleset(dir: &std::path::Path, required: bool) {
    fs::write(
        dir.join(".checkup.toml"),
        format!(
            r#"[project]
name = "staff-profiles"

[[rule]]
name = "hourly-rate"
field = "hourlyRate"
numeric = true
severity = "high"
required = {required}

[[rule]]
name = "phone"
field = "phone"
severity = "medium"
required = {required}
"#
        ),
    )
    .unwrap();
}

#[test]
fn test_records_pass_when_complete() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), true);

    fs::write(
        temp.path().join("staff.json"),
        r#"[
  {"id": "emp-1", "hourlyRate": 17.5, "phone": "+1 555 0100"},
  {"id": "emp-2", "hourlyRate": 0, "phone": "+1 555 0101"}
]"#,
    )
    .unwrap();

    // emp-2's rate of zero is present, not missing
    checkup()
        .args(["records", "staff.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 subject(s)"))
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_records_fail_on_missing_required_field() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), true);

    fs::write(
        temp.path().join("staff.json"),
        r#"[
  {"id": "emp-1", "hourlyRate": 17.5, "phone": "+1 555 0100"},
  {"id": "emp-2", "hourlyRate": null, "phone": "+1 555 0101"}
]"#,
    )
    .unwrap();

    checkup()
        .args(["records", "staff.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("emp-2"))
        .stdout(predicate::str::contains("hourly-rate"))
        .stdout(predicate::str::contains("FAILED"));
}

#[test]
fn test_records_optional_gaps_do_not_fail_the_run() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), false);

    fs::write(
        temp.path().join("staff.json"),
        r#"[{"id": "emp-1", "position": "Manager"}]"#,
    )
    .unwrap();

    // Both tracked fields are missing, but neither is required
    checkup()
        .args(["records", "staff.json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 missing"))
        .stdout(predicate::str::contains("OK"));
}

#[test]
fn test_records_custom_id_field() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), true);

    fs::write(
        temp.path().join("staff.json"),
        r#"[{"employeeId": "E-77", "phone": ""}]"#,
    )
    .unwrap();

    checkup()
        .args(["records", "staff.json", "--id-field", "employeeId"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("E-77"));
}

#[test]
fn test_records_index_fallback_for_missing_id() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), true);

    fs::write(temp.path().join("staff.json"), r#"[{"phone": "+1 555 0100"}]"#).unwrap();

    checkup()
        .args(["records", "staff.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("#0"));
}

#[test]
fn test_records_rejects_non_array_document() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), true);

    fs::write(temp.path().join("staff.json"), r#"{"id": "emp-1"}"#).unwrap();

    checkup()
        .args(["records", "staff.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn test_records_json_output_reports_gaps() {
    let temp = TempDir::new().unwrap();
    write_profile_ruleset(temp.path(), false);

    fs::write(temp.path().join("staff.json"), r#"[{"id": "emp-1"}]"#).unwrap();

    checkup()
        .args(["records", "staff.json", "--json"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"missing_count\": 2"))
        .stdout(predicate::str::contains("\"highest_missing\": \"high\""));
}
