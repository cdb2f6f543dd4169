use crate::errors::{AppError, AppResult};
use crate::models::entry::{DailyEntry, EntryFields};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const ENTRY_COLUMNS: &str = "entry_date, shift1_start, shift1_end, shift2_start, shift2_end,
     overtime_start, overtime_end, overtime_reason, overtime_description, note";

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Text column that may be NULL in databases written by older releases.
fn text(row: &Row, col: &str) -> Result<String> {
    Ok(row.get::<_, Option<String>>(col)?.unwrap_or_default())
}

pub fn map_row(row: &Row) -> Result<DailyEntry> {
    let date_str: String = row.get("entry_date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DailyEntry {
        date,
        fields: EntryFields {
            shift1_start: text(row, "shift1_start")?,
            shift1_end: text(row, "shift1_end")?,
            shift2_start: text(row, "shift2_start")?,
            shift2_end: text(row, "shift2_end")?,
            overtime_start: text(row, "overtime_start")?,
            overtime_end: text(row, "overtime_end")?,
            overtime_reason: text(row, "overtime_reason")?,
            overtime_description: text(row, "overtime_description")?,
            note: text(row, "note")?,
        },
    })
}

pub fn load_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DailyEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries WHERE entry_date = ?1"
    ))?;

    let entry = stmt.query_row([date_key(date)], map_row).optional()?;
    Ok(entry)
}

/// Load every stored entry with `start <= date <= end`, ordered by date.
pub fn load_entries_between(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DailyEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {ENTRY_COLUMNS} FROM entries
         WHERE entry_date BETWEEN ?1 AND ?2
         ORDER BY entry_date ASC"
    ))?;

    let rows = stmt.query_map(params![date_key(start), date_key(end)], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert the row for `date`, or replace all of its fields if it exists.
pub fn upsert_entry(conn: &Connection, date: &NaiveDate, f: &EntryFields) -> AppResult<()> {
    conn.execute(
        "INSERT INTO entries (
             entry_date, shift1_start, shift1_end, shift2_start, shift2_end,
             overtime_start, overtime_end, overtime_reason, overtime_description, note
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(entry_date) DO UPDATE SET
             shift1_start = excluded.shift1_start,
             shift1_end = excluded.shift1_end,
             shift2_start = excluded.shift2_start,
             shift2_end = excluded.shift2_end,
             overtime_start = excluded.overtime_start,
             overtime_end = excluded.overtime_end,
             overtime_reason = excluded.overtime_reason,
             overtime_description = excluded.overtime_description,
             note = excluded.note",
        params![
            date_key(date),
            f.shift1_start,
            f.shift1_end,
            f.shift2_start,
            f.shift2_end,
            f.overtime_start,
            f.overtime_end,
            f.overtime_reason,
            f.overtime_description,
            f.note,
        ],
    )?;
    Ok(())
}

/// Delete the row for `date`. Returns whether a row was removed.
pub fn delete_entry(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute("DELETE FROM entries WHERE entry_date = ?1", [date_key(date)])?;
    Ok(n > 0)
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?)
}

/// Earliest and latest stored dates, if any row exists.
pub fn first_and_last_date(conn: &Connection) -> AppResult<Option<(String, String)>> {
    let bounds: (Option<String>, Option<String>) = conn.query_row(
        "SELECT MIN(entry_date), MAX(entry_date) FROM entries",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(match bounds {
        (Some(first), Some(last)) => Some((first, last)),
        _ => None,
    })
}
