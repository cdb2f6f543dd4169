use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::day_view::{DayExport, DayView};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

fn to_records(views: &[DayView]) -> Vec<DayExport> {
    views.iter().map(DayView::to_export).collect()
}

/// Export JSON pretty-printed, one object per day.
pub(crate) fn export_json(views: &[DayView], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&to_records(views))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path, views.len());
    Ok(())
}

/// Export CSV (header included thanks to serde), one line per day.
pub(crate) fn export_csv(views: &[DayView], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for item in to_records(views) {
        wtr.serialize(item)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path, views.len());
    Ok(())
}
