use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, setup_test_db, ts};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    ts().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_and_show_day() {
    let db_path = setup_test_db("cli_add_show");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("2025-09-01"))
        .stdout(contains("8 jam 0 menit"));

    ts().args(["--db", &db_path, "show", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("4 jam 0 menit"))
        .stdout(contains("3 jam 30 menit"))
        .stdout(contains("Deadline proyek"));
}

#[test]
fn test_add_replaces_whole_day() {
    let db_path = setup_test_db("cli_add_replace");
    init_db_with_data(&db_path);

    ts().args([
        "--db",
        &db_path,
        "add",
        "2025-09-15",
        "--in1",
        "09:00",
        "--out1",
        "10:00",
    ])
    .assert()
    .success()
    .stdout(contains("1 jam 0 menit"));

    ts().args(["--db", &db_path, "show", "2025-09-15"])
        .assert()
        .success()
        .stdout(contains("Deadline proyek").not())
        .stdout(contains("3 jam 30 menit").not());
}

#[test]
fn test_add_without_date_fails() {
    let db_path = setup_test_db("cli_add_nodate");

    ts().args(["--db", &db_path, "add", "--in1", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Please select a date first"));
}

#[test]
fn test_add_with_invalid_date_fails() {
    let db_path = setup_test_db("cli_add_baddate");

    ts().args(["--db", &db_path, "add", "2025-13-01", "--in1", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_warns_on_malformed_time() {
    let db_path = setup_test_db("cli_add_malformed");

    ts().args([
        "--db",
        &db_path,
        "add",
        "2025-10-01",
        "--in1",
        "8.00",
        "--out1",
        "12:00",
    ])
    .assert()
    .success()
    .stdout(contains("shift1_start = '8.00'"))
    .stdout(contains("Entry saved for 2025-10-01"));
}

#[test]
fn test_show_missing_day_is_not_an_error() {
    let db_path = setup_test_db("cli_show_missing");

    ts().args(["--db", &db_path, "show", "2025-01-02"])
        .assert()
        .success()
        .stdout(contains("No entry saved for 2025-01-02"));
}

#[test]
fn test_list_month_has_every_day() {
    let db_path = setup_test_db("cli_list_month");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "list", "--month", "2025-09"])
        .assert()
        .success()
        .stdout(contains("September 2025"))
        .stdout(contains("2025-09-01"))
        .stdout(contains("2025-09-30"))
        .stdout(contains("2025-10-01").not())
        .stdout(contains("Days saved: 2/30"))
        .stdout(contains("Worked: 12 jam 0 menit"))
        .stdout(contains("Overtime: 3 jam 30 menit"));
}

#[test]
fn test_list_leap_february() {
    let db_path = setup_test_db("cli_list_leap");

    ts().args(["--db", &db_path, "list", "--month", "2024-02"])
        .assert()
        .success()
        .stdout(contains("2024-02-29"))
        .stdout(contains("Days saved: 0/29"));
}

#[test]
fn test_list_rejects_bad_month() {
    let db_path = setup_test_db("cli_list_badmonth");

    ts().args(["--db", &db_path, "list", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_del_removes_day() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry deleted for 2025-09-01"));

    ts().args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("No entry saved for 2025-09-01"));

    // second delete is a no-op
    ts().args(["--db", &db_path, "del", "2025-09-01", "--yes"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_del_cancelled_without_confirmation() {
    let db_path = setup_test_db("cli_del_cancel");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "del", "2025-09-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    ts().args(["--db", &db_path, "show", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("8 jam 0 menit"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "del", "2025-09-15", "-y"])
        .assert()
        .success();

    ts().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("del"))
        .stdout(contains("2025-09-15"));
}

#[test]
fn test_reasons_lists_presets() {
    ts().args(["reasons"])
        .assert()
        .success()
        .stdout(contains("Deadline proyek"))
        .stdout(contains("Maintenance sistem"));
}

#[test]
fn test_sync_dry_run_needs_no_credentials() {
    let db_path = setup_test_db("cli_sync_dry");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "sync", "--month", "2025-09", "--dry-run"])
        .assert()
        .success()
        .stdout(contains("2025-09-15  24 rows  (saved)"))
        .stdout(contains("30 tab(s)"));
}

#[test]
fn test_sync_without_spreadsheet_id_fails() {
    let db_path = setup_test_db("cli_sync_noid");

    ts().args(["--db", &db_path, "sync", "--month", "2025-09"])
        .assert()
        .failure();
}

#[test]
fn test_db_info() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    ts().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}
