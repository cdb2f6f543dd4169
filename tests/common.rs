#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Config directory used by every CLI test, so nothing touches the real home.
pub fn test_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("timesheet_test_home");
    fs::create_dir_all(&path).ok();
    path
}

pub fn ts() -> Command {
    let mut cmd = cargo_bin_cmd!("timesheet");
    cmd.env("TIMESHEET_HOME", test_home());
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesheet.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    ts().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ts().args([
        "--db",
        db_path,
        "add",
        "2025-09-01",
        "--in1",
        "08:00",
        "--out1",
        "12:00",
        "--in2",
        "13:00",
        "--out2",
        "17:00",
    ])
    .assert()
    .success();

    ts().args([
        "--db",
        db_path,
        "add",
        "2025-09-15",
        "--in1",
        "08:00",
        "--out1",
        "12:00",
        "--ot-in",
        "22:00",
        "--ot-out",
        "01:30",
        "--reason",
        "Deadline proyek",
        "--description",
        "Release preparation",
    ])
    .assert()
    .success();
}
