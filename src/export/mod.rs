//! Month export to a local file.
//!
//! `xlsx` reproduces the per-day sheet layout of `template`; `csv` and `json`
//! flatten each day into one record.

mod json_csv;
pub mod logic;
pub mod template;
mod xlsx;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path, days: usize) {
    success(format!("{label} export completed ({days} days): {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// One worksheet per day
    Xlsx,
    /// One line per day
    Csv,
    /// Array of day objects
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Whether `path` carries this format's extension (case-insensitive).
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.as_str()))
    }
}
