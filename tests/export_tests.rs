mod common;
use common::{TWO_DAYS, rwl, temp_log, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_json() {
    let log = temp_log("export_json", TWO_DAYS);
    let out = temp_out("export_json", "json");

    rwl()
        .args(["--export", &out, "--format", "json", &log])
        .assert()
        .success()
        .stdout(contains("Total accumulated time credit: -5m"))
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["total_overtime_minutes"], -5);
    assert_eq!(value["days"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["days"][1]["date"], "02/03");
    assert_eq!(value["days"][1]["start_delay_minutes"], -15);
}

#[test]
fn test_export_csv() {
    let log = temp_log("export_csv", TWO_DAYS);
    let out = temp_out("export_csv", "csv");

    rwl()
        .args(["--export", &out, "--format", "csv", &log])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(concat!(
            "date,logged_start,actual_start,start_delay_minutes,breaks,",
            "overtime_minutes,expected_out,adjusted_expected_out"
        ))
    );
    assert_eq!(lines.next(), Some("01/03,09:00,09:10,10,1,15,18:00,18:15"));
    assert_eq!(lines.next(), Some("02/03,09:00,08:45,-15,1,-20,18:00,17:40"));
    assert_eq!(lines.next(), None);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let log = temp_log("export_force", TWO_DAYS);
    let out = temp_out("export_force", "json");
    fs::write(&out, "previous").unwrap();

    rwl()
        .args(["--export", &out, &log])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("already exists"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");

    rwl()
        .args(["--export", &out, "--force", &log])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"days\""));
}

#[test]
fn test_no_export_on_parse_error() {
    let log = temp_log("export_bad", "01/03 - 09:00 (25:99) in.\n");
    let out = temp_out("export_bad", "json");

    rwl()
        .args(["--export", &out, &log])
        .assert()
        .failure()
        .code(1);
    assert!(fs::metadata(&out).is_err());
}
