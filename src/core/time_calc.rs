//! Time arithmetic on raw `HH:MM` strings.
//!
//! Every function here is total: blank, missing or malformed input resolves to
//! "absent", and absent contributes zero minutes. Saving a half-filled or
//! mistyped form never fails because of a time value.

/// Minutes in a calendar day, used for the overtime midnight rollover.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Rendering of a zero (or negative) duration.
pub const ZERO_DURATION: &str = "0 menit";

/// Result of parsing a raw time field.
///
/// `Absent` and `Malformed` collapse to the same zero contribution in the
/// duration math, but stay distinct so callers can warn about typos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeValue {
    Absent,
    Malformed(String),
    Minutes(i32),
}

impl TimeValue {
    /// Minutes since midnight, or `None` for absent/malformed input.
    pub fn minutes(&self) -> Option<i32> {
        match self {
            TimeValue::Minutes(m) => Some(*m),
            _ => None,
        }
    }

    /// Numeric value used by the duration math: absent and malformed are 0.
    pub fn or_zero(&self) -> i32 {
        self.minutes().unwrap_or(0)
    }

    /// True only for a value inside a real clock day (00:00..=23:59).
    ///
    /// Parsing itself does not clamp, `"37:00"` is a valid `Minutes(2220)`.
    pub fn is_clock_time(&self) -> bool {
        matches!(self, TimeValue::Minutes(m) if (0..MINUTES_PER_DAY).contains(m))
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, TimeValue::Malformed(_))
    }
}

/// Parse a raw `HH:MM` field.
///
/// Exactly two integer components separated by `:` are required. Values are
/// not range-checked.
pub fn parse_time(value: Option<&str>) -> TimeValue {
    let raw = match value.map(str::trim) {
        None | Some("") => return TimeValue::Absent,
        Some(s) => s,
    };

    let mut parts = raw.split(':');
    let (Some(h), Some(m), None) = (parts.next(), parts.next(), parts.next()) else {
        return TimeValue::Malformed(raw.to_string());
    };

    match (h.trim().parse::<i32>(), m.trim().parse::<i32>()) {
        (Ok(h), Ok(m)) => h
            .checked_mul(60)
            .and_then(|hm| hm.checked_add(m))
            .map(TimeValue::Minutes)
            .unwrap_or_else(|| TimeValue::Malformed(raw.to_string())),
        _ => TimeValue::Malformed(raw.to_string()),
    }
}

/// Minutes since midnight for a valid field, `None` otherwise.
pub fn parse_time_to_minutes(value: Option<&str>) -> Option<i32> {
    parse_time(value).minutes()
}

fn minutes_or_zero(value: &str) -> i32 {
    parse_time(Some(value)).or_zero()
}

/// Total worked minutes over the two daily shifts.
///
/// Each shift adds `max(0, end - start)`, absent boundaries reading as minute
/// 0. An inverted shift (`end <= start`) or one with no end adds nothing.
/// Work shifts never roll over midnight.
///
/// Arithmetic saturates: parsing accepts any `HH:MM` that fits an `i32`.
pub fn worked_duration(
    shift1_start: &str,
    shift1_end: &str,
    shift2_start: &str,
    shift2_end: &str,
) -> i32 {
    let first = minutes_or_zero(shift1_end).saturating_sub(minutes_or_zero(shift1_start));
    let second = minutes_or_zero(shift2_end).saturating_sub(minutes_or_zero(shift2_start));

    first.max(0).saturating_add(second.max(0))
}

/// Overtime minutes, rolling over midnight when `end` is before `start`.
///
/// Either side resolving to 0 yields 0. A boundary at exactly `00:00` is
/// therefore read as absent.
pub fn overtime_duration(start: &str, end: &str) -> i32 {
    let a = minutes_or_zero(start);
    let mut b = minutes_or_zero(end);

    if a == 0 || b == 0 {
        return 0;
    }

    if b < a {
        b = b.saturating_add(MINUTES_PER_DAY);
    }

    b.saturating_sub(a).max(0)
}

/// Human-readable duration: `"8 jam 0 menit"`, or `"0 menit"` when `<= 0`.
pub fn format_duration(minutes: i32) -> String {
    if minutes <= 0 {
        return ZERO_DURATION.to_string();
    }

    format!("{} jam {} menit", minutes / 60, minutes % 60)
}
