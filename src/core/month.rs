//! Month read model: stored rows joined with the derived durations.

use crate::core::time_calc::{format_duration, overtime_duration, worked_duration};
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::day_view::DayView;
use crate::models::entry::DailyEntry;
use chrono::{Datelike, NaiveDate};

/// Every calendar day of `year`-`month`, in order (leap years respected).
pub fn month_dates(year: i32, month: u32) -> AppResult<Vec<NaiveDate>> {
    let mut d = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year:04}-{month:02}")))?;

    let mut out = Vec::with_capacity(31);
    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

/// Combine a date and its optional stored row into the read model.
///
/// Totals are recomputed from the raw fields every time. A date without a
/// row renders blank totals rather than "0 menit".
pub fn build_day_view(date: NaiveDate, entry: Option<DailyEntry>) -> DayView {
    match entry {
        Some(e) => {
            let f = &e.fields;
            let worked =
                worked_duration(&f.shift1_start, &f.shift1_end, &f.shift2_start, &f.shift2_end);
            let overtime = overtime_duration(&f.overtime_start, &f.overtime_end);

            DayView {
                date,
                worked_minutes: worked,
                overtime_minutes: overtime,
                worked_text: format_duration(worked),
                overtime_text: format_duration(overtime),
                entry: Some(e),
            }
        }
        None => DayView {
            date,
            entry: None,
            worked_minutes: 0,
            overtime_minutes: 0,
            worked_text: String::new(),
            overtime_text: String::new(),
        },
    }
}

/// Read model of every day of a month, in one storage pass.
pub fn load_month<S: EntryStore + ?Sized>(
    store: &S,
    year: i32,
    month: u32,
) -> AppResult<Vec<DayView>> {
    let dates = month_dates(year, month)?;
    let rows = store.list_range(&dates)?;

    Ok(rows
        .into_iter()
        .map(|(date, entry)| build_day_view(date, entry))
        .collect())
}

/// Totals over a set of days: (worked minutes, overtime minutes).
pub fn month_totals(views: &[DayView]) -> (i32, i32) {
    views.iter().fold((0, 0), |(w, o), v| {
        (
            w.saturating_add(v.worked_minutes),
            o.saturating_add(v.overtime_minutes),
        )
    })
}
