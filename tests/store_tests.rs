use chrono::NaiveDate;
use rusqlite::Connection;
use timesheet::core::entry::EntryLogic;
use timesheet::core::month::{load_month, month_dates, month_totals};
use timesheet::db::migrate::{run_pending_migrations, table_has_column};
use timesheet::db::pool::DbPool;
use timesheet::db::store::EntryStore;
use timesheet::errors::AppError;
use timesheet::models::entry::EntryFields;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn full_day() -> EntryFields {
    EntryFields {
        shift1_start: "08:00".into(),
        shift1_end: "12:00".into(),
        shift2_start: "13:00".into(),
        shift2_end: "17:00".into(),
        overtime_start: "19:00".into(),
        overtime_end: "21:00".into(),
        overtime_reason: "Bug fix urgent".into(),
        overtime_description: "Hotfix for invoice rounding".into(),
        note: String::new(),
    }
}

fn row_count(pool: &DbPool) -> i64 {
    pool.conn
        .query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn upsert_twice_keeps_one_row() {
    let mut pool = DbPool::open_in_memory().unwrap();
    let date = d("2024-05-02");

    pool.upsert(&date, &full_day()).unwrap();
    let first = pool.get(&date).unwrap();
    pool.upsert(&date, &full_day()).unwrap();

    assert_eq!(pool.get(&date).unwrap(), first);
    assert_eq!(row_count(&pool), 1);
}

#[test]
fn upsert_replaces_every_field() {
    let mut pool = DbPool::open_in_memory().unwrap();
    let date = d("2024-05-03");

    pool.upsert(&date, &full_day()).unwrap();

    let replacement = EntryFields {
        shift1_start: "09:00".into(),
        shift1_end: "10:00".into(),
        ..Default::default()
    };
    pool.upsert(&date, &replacement).unwrap();

    let stored = pool.get(&date).unwrap().unwrap();
    assert_eq!(stored.fields, replacement);
    assert_eq!(stored.fields.overtime_reason, "");
    assert_eq!(row_count(&pool), 1);
}

#[test]
fn delete_then_get_is_none() {
    let mut pool = DbPool::open_in_memory().unwrap();
    let date = d("2024-06-10");

    pool.upsert(&date, &full_day()).unwrap();
    assert!(pool.delete(&date).unwrap());
    assert!(pool.get(&date).unwrap().is_none());

    // deleting a date that has no row is a no-op
    assert!(!pool.delete(&date).unwrap());
    assert!(!pool.delete(&d("1999-01-01")).unwrap());
}

#[test]
fn list_range_covers_every_requested_date() {
    let mut pool = DbPool::open_in_memory().unwrap();
    pool.upsert(&d("2024-02-10"), &full_day()).unwrap();
    pool.upsert(&d("2024-03-01"), &full_day()).unwrap();

    let dates = month_dates(2024, 2).unwrap();
    let map = pool.list_range(&dates).unwrap();

    assert_eq!(map.len(), 29);
    assert!(map[&d("2024-02-10")].is_some());
    assert_eq!(map.values().filter(|e| e.is_some()).count(), 1);
    assert!(!map.contains_key(&d("2024-03-01")));
}

#[test]
fn month_dates_respects_leap_years() {
    assert_eq!(month_dates(2024, 2).unwrap().len(), 29);
    assert_eq!(month_dates(2023, 2).unwrap().len(), 28);
    assert_eq!(month_dates(2000, 2).unwrap().len(), 29);
    assert_eq!(month_dates(1900, 2).unwrap().len(), 28);
    assert_eq!(month_dates(2024, 4).unwrap().len(), 30);
    assert_eq!(month_dates(2024, 12).unwrap().len(), 31);

    let jan = month_dates(2024, 1).unwrap();
    assert_eq!(jan.first(), Some(&d("2024-01-01")));
    assert_eq!(jan.last(), Some(&d("2024-01-31")));
}

#[test]
fn month_dates_rejects_bad_month() {
    assert!(matches!(month_dates(2024, 13), Err(AppError::InvalidMonth(_))));
    assert!(matches!(month_dates(2024, 0), Err(AppError::InvalidMonth(_))));
}

#[test]
fn load_month_builds_views_with_totals() {
    let mut pool = DbPool::open_in_memory().unwrap();
    pool.upsert(&d("2024-09-02"), &full_day()).unwrap();

    let night = EntryFields {
        overtime_start: "22:00".into(),
        overtime_end: "02:00".into(),
        ..Default::default()
    };
    pool.upsert(&d("2024-09-03"), &night).unwrap();

    let views = load_month(&pool, 2024, 9).unwrap();
    assert_eq!(views.len(), 30);

    let stored = &views[1];
    assert_eq!(stored.date, d("2024-09-02"));
    assert_eq!(stored.worked_minutes, 480);
    assert_eq!(stored.worked_text, "8 jam 0 menit");
    assert_eq!(stored.overtime_text, "2 jam 0 menit");

    let rollover = &views[2];
    assert_eq!(rollover.overtime_minutes, 240);
    assert_eq!(rollover.worked_text, "0 menit");

    let blank = &views[0];
    assert!(!blank.is_stored());
    assert_eq!(blank.worked_text, "");
    assert_eq!(blank.overtime_text, "");

    assert_eq!(month_totals(&views), (480, 120 + 240));
}

#[test]
fn save_trims_and_returns_view() {
    let mut pool = DbPool::open_in_memory().unwrap();

    let fields = EntryFields {
        shift1_start: " 08:00 ".into(),
        shift1_end: "12:00\n".into(),
        note: "  bring laptop  ".into(),
        ..Default::default()
    };

    let view = EntryLogic::save(&mut pool, Some("2024-07-01"), fields).unwrap();
    assert_eq!(view.worked_minutes, 240);

    let stored = pool.get(&d("2024-07-01")).unwrap().unwrap();
    assert_eq!(stored.fields.shift1_start, "08:00");
    assert_eq!(stored.fields.shift1_end, "12:00");
    assert_eq!(stored.fields.note, "bring laptop");
}

#[test]
fn save_keeps_malformed_time_as_typed() {
    let mut pool = DbPool::open_in_memory().unwrap();

    let fields = EntryFields {
        shift1_start: "8.00".into(),
        shift1_end: "12:00".into(),
        ..Default::default()
    };

    let suspicious = EntryLogic::suspicious_times(&fields);
    assert_eq!(suspicious, vec![("shift1_start", "8.00".to_string())]);

    let view = EntryLogic::save(&mut pool, Some("2024-07-02"), fields).unwrap();
    assert_eq!(view.fields().shift1_start, "8.00");
    assert_eq!(view.worked_minutes, 720);
}

#[test]
fn save_requires_a_valid_date() {
    let mut pool = DbPool::open_in_memory().unwrap();

    assert!(matches!(
        EntryLogic::save(&mut pool, None, full_day()),
        Err(AppError::MissingDate)
    ));
    assert!(matches!(
        EntryLogic::save(&mut pool, Some("  "), full_day()),
        Err(AppError::MissingDate)
    ));
    assert!(matches!(
        EntryLogic::save(&mut pool, Some("2024-02-30"), full_day()),
        Err(AppError::InvalidDate(_))
    ));
    assert_eq!(row_count(&pool), 0);
}

#[test]
fn load_of_missing_date_is_blank_view() {
    let pool = DbPool::open_in_memory().unwrap();
    let view = EntryLogic::load(&pool, Some("2024-01-15")).unwrap();

    assert!(!view.is_stored());
    assert!(view.fields().is_empty());
    assert_eq!(view.worked_minutes, 0);
}

#[test]
fn migrations_are_idempotent() {
    let pool = DbPool::open_in_memory().unwrap();
    run_pending_migrations(&pool.conn).unwrap();
    run_pending_migrations(&pool.conn).unwrap();

    let markers: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |r| r.get(0),
        )
        .unwrap();
    assert_eq!(markers, 4);
}

#[test]
fn older_schema_gains_missing_columns() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             entry_date TEXT NOT NULL,
             jam_mulai_1 TEXT, jam_selesai_1 TEXT,
             jam_mulai_2 TEXT, jam_selesai_2 TEXT,
             lembur_mulai TEXT, lembur_selesai TEXT
         );
         INSERT INTO entries (entry_date, jam_mulai_1, jam_selesai_1)
         VALUES ('2023-11-06', '08:00', '16:00');",
    )
    .unwrap();

    run_pending_migrations(&conn).unwrap();
    run_pending_migrations(&conn).unwrap();

    for col in ["shift1_start", "overtime_end", "overtime_reason", "overtime_description", "note"] {
        assert!(table_has_column(&conn, "entries", col).unwrap(), "{col}");
    }
    assert!(!table_has_column(&conn, "entries", "jam_mulai_1").unwrap());

    let pool = DbPool { conn };
    let entry = pool.get(&d("2023-11-06")).unwrap().unwrap();
    assert_eq!(entry.fields.shift1_start, "08:00");
    assert_eq!(entry.fields.shift2_start, "");
    assert_eq!(entry.fields.note, "");
}

#[test]
fn duplicate_dates_collapse_to_newest_row() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             entry_date TEXT NOT NULL,
             shift1_start TEXT NOT NULL DEFAULT '', shift1_end TEXT NOT NULL DEFAULT '',
             shift2_start TEXT NOT NULL DEFAULT '', shift2_end TEXT NOT NULL DEFAULT '',
             overtime_start TEXT NOT NULL DEFAULT '', overtime_end TEXT NOT NULL DEFAULT ''
         );
         INSERT INTO entries (entry_date, shift1_start) VALUES ('2023-12-01', '07:00');
         INSERT INTO entries (entry_date, shift1_start) VALUES ('2023-12-01', '09:00');",
    )
    .unwrap();

    run_pending_migrations(&conn).unwrap();

    let pool = DbPool { conn };
    assert_eq!(row_count(&pool), 1);
    let entry = pool.get(&d("2023-12-01")).unwrap().unwrap();
    assert_eq!(entry.fields.shift1_start, "09:00");
}

#[test]
fn month_totals_saturate_on_extreme_entries() {
    let mut pool = DbPool::open_in_memory().unwrap();

    let extreme = EntryFields {
        shift1_start: "-35791394:00".into(),
        shift1_end: "35791394:00".into(),
        overtime_start: "35791394:07".into(),
        overtime_end: "35791394:00".into(),
        ..Default::default()
    };
    pool.upsert(&d("2024-09-02"), &extreme).unwrap();
    pool.upsert(&d("2024-09-03"), &extreme).unwrap();

    let views = load_month(&pool, 2024, 9).unwrap();
    assert_eq!(views[1].worked_minutes, i32::MAX);
    assert_eq!(views[1].overtime_minutes, 0);
    assert_eq!(month_totals(&views), (i32::MAX, 0));
}
