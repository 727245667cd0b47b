#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("tenurecalc")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tenurecalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB and pin the worksheet language to Spanish
pub fn init_test_db(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tc().args(["--db", db_path, "--test", "lang", "es"])
        .assert()
        .success();
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Row id printed by `add` ("Row <id> added to ...").
pub fn added_row_id(stdout: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(stdout);
    let line = text
        .lines()
        .find(|l| l.contains("Row ") && l.contains(" added to "))
        .expect("add confirmation line");
    let after = line.split("Row ").nth(1).expect("row id");
    after
        .split_whitespace()
        .next()
        .and_then(|s| s.parse().ok())
        .expect("numeric row id")
}

/// Add a row through the CLI and return its id
pub fn add_row(db_path: &str, table: &str, start: &str, end: &str) -> i64 {
    let out = tc()
        .args([
            "--db", db_path, "--test", "add", "-t", table, "--start", start, "--end", end,
        ])
        .output()
        .expect("run add");
    assert!(out.status.success(), "add failed: {:?}", out);
    added_row_id(&out.stdout)
}

/// Id printed on the "Calculation id: <id>" line after a save.
pub fn saved_calculation_id(stdout: &[u8]) -> i64 {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|l| l.split("Calculation id: ").nth(1))
        .and_then(|s| s.trim().parse().ok())
        .expect("calculation id line")
}

/// Id of the first read-only row in `show` output.
pub fn first_read_only_id(stdout: &[u8], read_only_label: &str) -> i64 {
    let text = String::from_utf8_lossy(stdout);
    let marker = format!("[{}]", read_only_label);
    text.lines()
        .find(|l| l.contains(&marker))
        .map(|l| l.trim_start_matches("\u{1b}[90m"))
        .and_then(|l| l.split_whitespace().next())
        .and_then(|s| s.parse().ok())
        .expect("read-only row")
}
