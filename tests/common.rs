#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// `rattendance` with an isolated HOME, so no real config file is read.
pub fn rta(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", test_home(name));
    cmd
}

pub fn test_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_home", name));
    fs::create_dir_all(&path).ok();
    path.to_string_lossy().to_string()
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

pub const CLASSES_JSON: &str = r#"[{"id":1,"name":"CS-A"},{"id":2,"name":"CS-B"}]"#;

pub const STUDENTS_JSON: &str = r#"[
    {"roll_number":1,"name":"Asha"},
    {"roll_number":2,"name":"Bilal"},
    {"roll_number":3,"name":"Chen"}
]"#;
