/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey out an empty or zero cell, leave anything else as is.
///
/// Padding must already be applied: the escape codes have no width.
pub fn colorize_optional(value: &str) -> String {
    let t = value.trim();
    if t.is_empty() || t == "-" || t == crate::core::time_calc::ZERO_DURATION {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Overtime cells stand out when non-zero.
pub fn colorize_overtime(value: &str, minutes: i32) -> String {
    if minutes > 0 {
        format!("{MAGENTA}{value}{RESET}")
    } else {
        colorize_optional(value)
    }
}
