use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> AppResult<(i32, u32)> {
    let raw = s.trim();
    let (y, m) = raw
        .split_once('-')
        .ok_or_else(|| AppError::InvalidMonth(raw.to_string()))?;

    let year: i32 = y.parse().map_err(|_| AppError::InvalidMonth(raw.to_string()))?;
    let month: u32 = m.parse().map_err(|_| AppError::InvalidMonth(raw.to_string()))?;

    if y.len() != 4 || !(1..=12).contains(&month) {
        return Err(AppError::InvalidMonth(raw.to_string()));
    }
    Ok((year, month))
}

/// `--month` if given, otherwise the current month.
pub fn resolve_month(month: &Option<String>) -> AppResult<(i32, u32)> {
    match month {
        Some(m) => parse_month(m),
        None => {
            let t = today();
            Ok((t.year(), t.month()))
        }
    }
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        12 => "Desember",
        _ => "?",
    }
}
