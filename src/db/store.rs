//! Storage contract for daily entries.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::entry::{DailyEntry, EntryFields};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Requested dates mapped to their stored row, or `None`.
pub type DayMap = BTreeMap<NaiveDate, Option<DailyEntry>>;

/// Keyed persistence of `DailyEntry` rows, one per calendar date.
pub trait EntryStore {
    fn get(&self, date: &NaiveDate) -> AppResult<Option<DailyEntry>>;

    /// Insert if absent, else replace every raw field of the existing row.
    fn upsert(&mut self, date: &NaiveDate, fields: &EntryFields) -> AppResult<()>;

    /// Remove the row for `date`; deleting a missing date is not an error.
    /// Returns whether a row was removed.
    fn delete(&mut self, date: &NaiveDate) -> AppResult<bool>;

    /// Every requested date mapped to its stored row, or `None`.
    fn list_range(&self, dates: &[NaiveDate]) -> AppResult<DayMap>;
}

impl EntryStore for DbPool {
    fn get(&self, date: &NaiveDate) -> AppResult<Option<DailyEntry>> {
        queries::load_entry_by_date(&self.conn, date)
    }

    fn upsert(&mut self, date: &NaiveDate, fields: &EntryFields) -> AppResult<()> {
        queries::upsert_entry(&self.conn, date, fields)
    }

    fn delete(&mut self, date: &NaiveDate) -> AppResult<bool> {
        queries::delete_entry(&self.conn, date)
    }

    fn list_range(&self, dates: &[NaiveDate]) -> AppResult<DayMap> {
        let mut out: DayMap = dates.iter().map(|d| (*d, None)).collect();

        let first = out.keys().next().copied();
        let last = out.keys().next_back().copied();
        let (Some(first), Some(last)) = (first, last) else {
            return Ok(out);
        };

        for entry in queries::load_entries_between(&self.conn, &first, &last)? {
            if let Some(slot) = out.get_mut(&entry.date) {
                *slot = Some(entry);
            }
        }

        Ok(out)
    }
}
