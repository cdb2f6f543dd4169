use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension};

/// Columns that were added after the first release of the `entries` table.
/// Each one is patched in only when missing, so reruns are no-ops.
const ADDITIVE_TEXT_COLUMNS: &[(&str, &str)] = &[
    ("20240301_0001_add_overtime_reason", "overtime_reason"),
    ("20240301_0002_add_overtime_description", "overtime_description"),
    ("20240410_0003_add_note", "note"),
];

/// Column names used by the first desktop release of the database file.
const LEGACY_COLUMN_NAMES: &[(&str, &str)] = &[
    ("jam_mulai_1", "shift1_start"),
    ("jam_selesai_1", "shift1_end"),
    ("jam_mulai_2", "shift2_start"),
    ("jam_selesai_2", "shift2_end"),
    ("lembur_mulai", "overtime_start"),
    ("lembur_selesai", "overtime_end"),
    ("alasan_lembur", "overtime_reason"),
    ("deskripsi_lembur", "overtime_description"),
];

const UNIQUE_DATE_MIGRATION: &str = "20240520_0004_unique_entry_date";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column named `column`.
pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Create the `entries` table with the current schema.
fn create_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            entry_date           TEXT NOT NULL,
            shift1_start         TEXT NOT NULL DEFAULT '',
            shift1_end           TEXT NOT NULL DEFAULT '',
            shift2_start         TEXT NOT NULL DEFAULT '',
            shift2_end           TEXT NOT NULL DEFAULT '',
            overtime_start       TEXT NOT NULL DEFAULT '',
            overtime_end         TEXT NOT NULL DEFAULT '',
            overtime_reason      TEXT NOT NULL DEFAULT '',
            overtime_description TEXT NOT NULL DEFAULT '',
            note                 TEXT NOT NULL DEFAULT ''
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_date ON entries(entry_date);
        "#,
    )?;
    Ok(())
}

/// Rename columns of a database written by the first desktop release.
fn migrate_legacy_column_names(conn: &Connection) -> AppResult<()> {
    for (old, new) in LEGACY_COLUMN_NAMES {
        if !table_has_column(conn, "entries", old)? {
            continue;
        }
        if table_has_column(conn, "entries", new)? {
            return Err(AppError::Migration(format!(
                "entries has both '{old}' and '{new}' columns"
            )));
        }

        conn.execute_batch(&format!("ALTER TABLE entries RENAME COLUMN {old} TO {new};"))?;
        success(format!("Renamed legacy column '{old}' to '{new}'."));
    }
    Ok(())
}

/// Add a text column to `entries` unless it is already there.
///
/// Existing rows get `''` for the new column.
fn add_text_column_if_missing(conn: &Connection, version: &str, column: &str) -> AppResult<()> {
    if table_has_column(conn, "entries", column)? {
        if !migration_applied(conn, version)? {
            mark_applied(conn, version, &format!("Column '{column}' already present"))?;
        }
        return Ok(());
    }

    conn.execute_batch(&format!(
        "ALTER TABLE entries ADD COLUMN {column} TEXT NOT NULL DEFAULT '';"
    ))
    .map_err(|e| AppError::Migration(format!("Failed to add '{column}' column: {e}")))?;

    mark_applied(conn, version, &format!("Added '{column}' to entries"))?;

    success(format!(
        "Migration applied: {version} → added '{column}' to entries table"
    ));
    Ok(())
}

fn count_duplicate_dates(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row(
        "SELECT COUNT(*) FROM (
             SELECT entry_date FROM entries GROUP BY entry_date HAVING COUNT(*) > 1
         )",
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}

/// Collapse duplicate dates (newest row wins) and enforce one row per date.
fn enforce_unique_entry_date(conn: &Connection) -> AppResult<()> {
    let duplicates = count_duplicate_dates(conn)?;

    if duplicates > 0 {
        warning(format!(
            "{duplicates} date(s) have more than one row; keeping the most recent one."
        ));
        backup_before_migration(conn, "pre_unique_date")?;

        conn.execute(
            "DELETE FROM entries
             WHERE id NOT IN (SELECT MAX(id) FROM entries GROUP BY entry_date)",
            [],
        )?;
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_date ON entries(entry_date);",
    )?;

    if !migration_applied(conn, UNIQUE_DATE_MIGRATION)? {
        mark_applied(
            conn,
            UNIQUE_DATE_MIGRATION,
            &format!("Unique index on entry_date ({duplicates} duplicate date(s) collapsed)"),
        )?;
    }
    Ok(())
}

/// Zip the database file next to itself before a destructive migration step.
fn backup_before_migration(conn: &Connection, label: &str) -> AppResult<()> {
    use chrono::Local;
    use std::fs::{self, File};
    use std::io::Write;
    use zip::CompressionMethod;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    let db_path: String = conn
        .query_row("PRAGMA database_list;", [], |row| row.get::<_, String>(2))
        .unwrap_or_default();

    if db_path.is_empty() {
        warning("Could not determine DB path, backup skipped.");
        return Ok(());
    }

    let backup_name = format!(
        "{}-backup_db_{}.zip",
        Local::now().format("%Y%m%d_%H%M%S"),
        label
    );

    let db_file = std::path::Path::new(&db_path);
    let backup_path = match db_file.parent() {
        Some(dir) => dir.join(&backup_name),
        None => std::path::PathBuf::from(&backup_name),
    };

    let file = File::create(&backup_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("database.sqlite", options)
        .map_err(|e| AppError::Migration(format!("Backup failed (start_file): {e}")))?;

    let db_content = fs::read(&db_path)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Migration(format!("Backup failed (finish): {e}")))?;

    success(format!("📦 Backup created: {}", backup_path.display()));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Safe to call on every start: each step checks the schema first.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Entries table: fresh schema, or bring an older one forward
    if !table_exists(conn, "entries")? {
        create_entries_table(conn)?;
        tracing::info!("created entries table");
        for (version, column) in ADDITIVE_TEXT_COLUMNS {
            mark_applied(conn, version, &format!("Column '{column}' created with table"))?;
        }
        mark_applied(conn, UNIQUE_DATE_MIGRATION, "Unique index created with table")?;
        return Ok(());
    }

    if table_has_column(conn, "entries", LEGACY_COLUMN_NAMES[0].0)? {
        warning("Legacy schema detected, creating safety backup before migration...");
        backup_before_migration(conn, "pre_rename")?;
    }
    migrate_legacy_column_names(conn)?;

    // 3) Additive columns
    for (version, column) in ADDITIVE_TEXT_COLUMNS {
        add_text_column_if_missing(conn, version, column)?;
    }

    // 4) One row per date
    enforce_unique_entry_date(conn)?;

    Ok(())
}
