use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;

mod common;
use common::{TWO_DAYS, rwl, temp_log};

#[test]
fn test_single_day_report() {
    let log = temp_log(
        "single_day",
        "01/03 - 09:00 (09:10) in.\n10:00 - 10:05 break.\n",
    );

    rwl()
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("Work Log Summary"))
        .stdout(contains("▸ Date: 01/03"))
        .stdout(contains("Logged start: 09:00 \t[Actual start: 09:10] (10m debt)"))
        .stdout(contains("• break: 10:00 - 10:00 [ended 10:05] (5m debt)"))
        .stdout(contains("Expected out: 18:00 (+15m for 0 day debt) 18:15"))
        .stdout(contains("Total accumulated time debt: +15m"));
}

#[test]
fn test_total_across_days() {
    let log = temp_log("two_days", TWO_DAYS);

    rwl()
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("▸ Date: 02/03"))
        .stdout(contains("• lunch: 13:00 - 14:00 [ended 13:55] (5m credit)"))
        .stdout(contains("Expected out: 18:00 (-20m for 0 day credit) 17:40"))
        .stdout(contains("Total accumulated time credit: -5m"));
}

#[test]
fn test_orphan_breaks_are_ignored() {
    let log = temp_log(
        "orphans",
        "10:00 - 10:30 break.\nnotes: forgot to clock in\n01/03 - 09:00 in.\n",
    );

    rwl()
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("break:").not())
        .stdout(contains("Total accumulated time debt: +0m"));
}

#[test]
fn test_hours_in_summary() {
    let log = temp_log("hours", "01/03 - 09:00 (10:30) in.\n11:00 - 11:05 break.\n");

    rwl()
        .arg(&log)
        .assert()
        .success()
        .stdout(contains("Total accumulated time debt: +1h 35m"));
}

#[test]
fn test_missing_argument_fails() {
    rwl().assert().failure().code(1);
}

#[test]
fn test_too_many_arguments_fails() {
    let log = temp_log("too_many", TWO_DAYS);
    rwl().args([&log, &log]).assert().failure().code(1);
}

#[test]
fn test_help_succeeds() {
    rwl()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("LOG_FILE"));
}

#[test]
fn test_missing_file_fails() {
    let mut path = env::temp_dir();
    path.push("definitely_missing_rworklog.log");
    std::fs::remove_file(&path).ok();

    rwl()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Could not find file"));
}

#[test]
fn test_bad_time_aborts_before_report() {
    let log = temp_log(
        "bad_time",
        "01/03 - 09:00 in.\n10:00 - 25:99 break.\n02/03 - 09:00 in.\n",
    );

    rwl()
        .arg(&log)
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Work Log Summary").not())
        .stderr(contains("Invalid time format: 25:99"));
}

#[test]
fn test_bad_date_aborts() {
    let log = temp_log("bad_date", "32/01 - 09:00 in.\n");

    rwl()
        .arg(&log)
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid date format: 32/01"));
}

#[test]
fn test_year_flag_pins_dates() {
    let log = temp_log("leap_day", "29/02 - 09:00 in.\n");

    rwl()
        .args(["--year", "2024", &log])
        .assert()
        .success()
        .stdout(contains("▸ Date: 29/02"));

    rwl()
        .args(["--year", "2023", &log])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_out_of_range_year_is_rejected() {
    let log = temp_log("huge_year", "31/12 - 23:00 in.\n");

    rwl()
        .args(["--year", "262142", &log])
        .assert()
        .failure()
        .code(1)
        .stdout(contains("Work Log Summary").not())
        .stderr(contains("year must be between 1 and 9999"));

    let cfg = temp_log("huge_year_conf", "year: 10000\n");
    rwl()
        .args(["--config", &cfg, &log])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn test_work_hours_flag() {
    let log = temp_log("work_hours", "01/03 - 08:00 in.\n");

    rwl()
        .args(["--work-hours", "7.5", &log])
        .assert()
        .success()
        .stdout(contains("Expected out: 15:30  15:30"));
}

#[test]
fn test_config_file() {
    let log = temp_log("config_file", "01/03 - 08:00 (08:10) in.\n");
    let cfg = temp_log("config_file_conf", "work_hours: 8\n");

    rwl()
        .args(["--config", &cfg, &log])
        .assert()
        .success()
        .stdout(contains("Expected out: 16:00 (+10m for 0 day debt) 16:10"));

    // command line wins over the file
    rwl()
        .args(["--config", &cfg, "--work-hours", "9", &log])
        .assert()
        .success()
        .stdout(contains("Expected out: 17:00"));
}

#[test]
fn test_broken_config_fails() {
    let log = temp_log("broken_config", TWO_DAYS);
    let cfg = temp_log("broken_config_conf", "work_hours: [nope\n");

    rwl()
        .args(["--config", &cfg, &log])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Configuration error"));
}
