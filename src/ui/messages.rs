//! Console messages for the user, mirrored to `tracing` for diagnostics.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let (color, icon) = level.style();
    let line = format!("{color}{BOLD}{icon}{RESET} {msg}");

    match level {
        Level::Error => {
            tracing::debug!(target: "timesheet::ui", level = "error", "{msg}");
            eprintln!("{line}");
        }
        Level::Warning => {
            tracing::debug!(target: "timesheet::ui", level = "warning", "{msg}");
            println!("{line}");
        }
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("\x1b[34m{BOLD}=== {msg} ==={RESET}\n");
}
