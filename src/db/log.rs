//! Audit rows in the `log` table.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append one audit row, timestamped with the local time (RFC 3339).
pub fn record(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?
    .execute(params![Local::now().to_rfc3339(), operation, target, message])?;

    Ok(())
}

/// `record`, downgrading a failure to a tracing warning.
///
/// Used after a committed write: the write stands even if its audit row
/// cannot be stored.
pub fn record_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = record(conn, operation, target, message) {
        tracing::warn!(operation, target, error = %e, "audit row not written");
    }
}
