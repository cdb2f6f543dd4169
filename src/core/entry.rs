//! Save / load / delete of a single day, as triggered by the user.

use crate::core::month::build_day_view;
use crate::core::time_calc::parse_time;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_view::DayView;
use crate::models::entry::EntryFields;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

pub struct EntryLogic;

impl EntryLogic {
    /// Validate the date input before anything touches storage.
    pub fn resolve_date(input: Option<&str>) -> AppResult<NaiveDate> {
        let raw = input.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(AppError::MissingDate);
        }
        parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
    }

    /// Time fields that will count as absent because they do not parse, or
    /// that parse to a value outside a clock day.
    pub fn suspicious_times(fields: &EntryFields) -> Vec<(&'static str, String)> {
        fields
            .time_fields()
            .into_iter()
            .filter_map(|(label, raw)| {
                let v = parse_time(Some(raw));
                let bad = v.is_malformed() || (v.minutes().is_some() && !v.is_clock_time());
                bad.then(|| (label, raw.to_string()))
            })
            .collect()
    }

    /// Store the full row for `date_input` (upsert) and return its read model.
    ///
    /// Malformed time values are stored as typed; they only count as zero.
    pub fn save<S: EntryStore + ?Sized>(
        store: &mut S,
        date_input: Option<&str>,
        mut fields: EntryFields,
    ) -> AppResult<DayView> {
        let date = Self::resolve_date(date_input)?;

        for (_, raw) in fields.time_fields_mut() {
            *raw = raw.trim().to_string();
        }
        fields.overtime_reason = fields.overtime_reason.trim().to_string();
        fields.overtime_description = fields.overtime_description.trim().to_string();
        fields.note = fields.note.trim().to_string();

        store.upsert(&date, &fields)?;
        tracing::debug!(%date, "entry saved");

        let stored = store.get(&date)?;
        Ok(build_day_view(date, stored))
    }

    pub fn load<S: EntryStore + ?Sized>(store: &S, date_input: Option<&str>) -> AppResult<DayView> {
        let date = Self::resolve_date(date_input)?;
        Ok(build_day_view(date, store.get(&date)?))
    }

    /// Remove the row for the date. Returns whether something was deleted.
    pub fn delete<S: EntryStore + ?Sized>(
        store: &mut S,
        date_input: Option<&str>,
    ) -> AppResult<(NaiveDate, bool)> {
        let date = Self::resolve_date(date_input)?;
        let removed = store.delete(&date)?;
        tracing::debug!(%date, removed, "entry delete");
        Ok((date, removed))
    }
}
