use super::entry::{DailyEntry, EntryFields};
use chrono::NaiveDate;
use serde::Serialize;

/// Read model of one calendar date: stored raw fields plus derived durations.
///
/// Built by `core::month::build_day_view`; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: NaiveDate,
    pub entry: Option<DailyEntry>,
    pub worked_minutes: i32,
    pub overtime_minutes: i32,
    /// Empty for a date with no stored row.
    pub worked_text: String,
    /// Empty for a date with no stored row.
    pub overtime_text: String,
}

impl DayView {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_stored(&self) -> bool {
        self.entry.is_some()
    }

    /// Raw fields, or an all-empty set for a date with no row.
    pub fn fields(&self) -> EntryFields {
        self.entry
            .as_ref()
            .map(|e| e.fields.clone())
            .unwrap_or_default()
    }

    pub fn to_export(&self) -> DayExport {
        let f = self.fields();
        DayExport {
            date: self.date_str(),
            shift1_start: f.shift1_start,
            shift1_end: f.shift1_end,
            shift2_start: f.shift2_start,
            shift2_end: f.shift2_end,
            worked_minutes: self.worked_minutes,
            worked: self.worked_text.clone(),
            overtime_start: f.overtime_start,
            overtime_end: f.overtime_end,
            overtime_minutes: self.overtime_minutes,
            overtime: self.overtime_text.clone(),
            overtime_reason: f.overtime_reason,
            overtime_description: f.overtime_description,
            note: f.note,
        }
    }
}

/// Flat record of a day for CSV / JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct DayExport {
    pub date: String,
    pub shift1_start: String,
    pub shift1_end: String,
    pub shift2_start: String,
    pub shift2_end: String,
    pub worked_minutes: i32,
    pub worked: String,
    pub overtime_start: String,
    pub overtime_end: String,
    pub overtime_minutes: i32,
    pub overtime: String,
    pub overtime_reason: String,
    pub overtime_description: String,
    pub note: String,
}
