//! End-to-end tests of the medcost binary.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn medcost(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_medcost"));
    cmd.current_dir(dir.path())
        .env("MEDCOST_NO_PROGRESS", "1")
        .env("NO_COLOR", "1")
        .env_remove("MEDCOST_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn test_estimate_json_reference_value() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(medcost(&temp).args([
        "estimate",
        "--no-delay",
        "--format",
        "json",
        "--age",
        "30",
        "--bmi",
        "25",
        "--children",
        "0",
        "--sex",
        "male",
        "--smoker",
        "no",
        "--region",
        "a",
    ]));

    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["estimate"], 8500.0);
    assert_eq!(json["formatted"], "$8,500.00");
    assert_eq!(json["input"]["smoker"], "no");
    assert_eq!(json["advice"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_estimate_terminal_shows_advice() {
    let temp = TempDir::new().unwrap();
    let out = stdout_of(medcost(&temp).args([
        "estimate",
        "--no-delay",
        "--plain",
        "--bmi",
        "31",
    ]));

    // 6000 + 3100 + 0 + 1000 + 0
    assert!(out.contains("Your Predicted Health Cost: $10,100.00"), "{}", out);
    assert!(out.contains("Reduce late nights"), "{}", out);
    assert!(out.contains("Your BMI indicates obesity"), "{}", out);
}

#[test]
fn test_estimate_rejects_out_of_range_bmi() {
    let temp = TempDir::new().unwrap();
    let assert = medcost(&temp)
        .args(["estimate", "--no-delay", "--bmi", "120"])
        .assert()
        .failure();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert!(stderr.contains("bmi must be between 0 and 100"), "{}", stderr);
}

#[test]
fn test_config_file_changes_threshold() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".medcost.toml"),
        "[advice]\nobesity_bmi_threshold = 40.0\n",
    )
    .unwrap();

    let out = stdout_of(medcost(&temp).args([
        "estimate",
        "--no-delay",
        "--format",
        "json",
        "--bmi",
        "35",
        "--smoker",
        "no",
    ]));
    let json: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["advice"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_report_without_data_file() {
    let temp = TempDir::new().unwrap();
    medcost(&temp)
        .args(["report", "-o", "out/report.html"])
        .assert()
        .success();

    let html = fs::read_to_string(temp.path().join("out/report.html")).unwrap();
    assert!(html.contains("$9,500.00"));
    assert!(html.contains("Make sure it is in the same directory as the application."));
    assert!(html.contains("<svg"));
}

#[test]
fn test_report_with_data_file_escapes_cells() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("history.csv"),
        "age,bmi,predicted_cost,note\n30,25.0,8500,<b>bold</b>\n",
    )
    .unwrap();

    medcost(&temp)
        .args(["report", "--data", "history.csv", "-o", "report.html"])
        .assert()
        .success();

    let html = fs::read_to_string(temp.path().join("report.html")).unwrap();
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<b>bold</b>"));
}

#[test]
fn test_init_writes_config_once() {
    let temp = TempDir::new().unwrap();
    medcost(&temp).arg("init").assert().success();
    assert!(temp.path().join(".medcost.toml").exists());

    medcost(&temp).arg("init").assert().failure();
    medcost(&temp).args(["init", "--force"]).assert().success();
}
