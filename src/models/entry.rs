use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw, user-entered fields of a daily entry.
///
/// Empty strings mean "absent". Time fields are kept exactly as typed; they
/// are only interpreted by `core::time_calc`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFields {
    pub shift1_start: String, // ⇔ entries.shift1_start
    pub shift1_end: String,   // ⇔ entries.shift1_end
    pub shift2_start: String, // ⇔ entries.shift2_start
    pub shift2_end: String,   // ⇔ entries.shift2_end

    pub overtime_start: String, // ⇔ entries.overtime_start
    pub overtime_end: String,   // ⇔ entries.overtime_end

    pub overtime_reason: String,      // ⇔ entries.overtime_reason
    pub overtime_description: String, // ⇔ entries.overtime_description
    pub note: String,                 // ⇔ entries.note
}

impl EntryFields {
    /// The six time fields with their labels, in form order.
    pub fn time_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("shift1_start", &self.shift1_start),
            ("shift1_end", &self.shift1_end),
            ("shift2_start", &self.shift2_start),
            ("shift2_end", &self.shift2_end),
            ("overtime_start", &self.overtime_start),
            ("overtime_end", &self.overtime_end),
        ]
    }

    pub fn time_fields_mut(&mut self) -> [(&'static str, &mut String); 6] {
        [
            ("shift1_start", &mut self.shift1_start),
            ("shift1_end", &mut self.shift1_end),
            ("shift2_start", &mut self.shift2_start),
            ("shift2_end", &mut self.shift2_end),
            ("overtime_start", &mut self.overtime_start),
            ("overtime_end", &mut self.overtime_end),
        ]
    }

    pub fn is_empty(&self) -> bool {
        *self == EntryFields::default()
    }
}

/// One stored row: the date key plus its raw fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyEntry {
    pub date: NaiveDate, // ⇔ entries.entry_date (TEXT "YYYY-MM-DD"), never updated
    #[serde(flatten)]
    pub fields: EntryFields,
}

impl DailyEntry {
    pub fn new(date: NaiveDate, fields: EntryFields) -> Self {
        Self { date, fields }
    }
}
