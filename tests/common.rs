#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an empty temp dir so no user
/// configuration leaks into the run.
pub fn rwl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rworklog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rworklog");
    cmd.env("HOME", home);
    cmd
}

/// Write `content` to a unique log file inside the system temp dir
pub fn temp_log(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworklog.log", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write log");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A two-day log used by several tests (+15m, then -20m)
pub const TWO_DAYS: &str = "\
01/03 - 09:00 (09:10) in.
10:00 - 10:05 break.

02/03 - 09:00 (08:45) in.
13:00 - 14:00 (13:55) lunch.
";
