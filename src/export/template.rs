//! Fixed per-day sheet layout shared by the Excel export and the remote sync.

use crate::models::day_view::DayView;

/// Rows holding only a section title.
pub const SECTION_TITLES: &[&str] = &["Identitas", "Waktu Kerja", "Tanggal & Waktu Lembur"];

/// Rows whose value is free text that may span several lines.
pub const LONG_TEXT_LABELS: &[&str] = &["Deskripsi Pekerjaan", "Catatan Tambahan"];

/// Placeholder of the second overtime interval, which is never filled.
pub const UNUSED_CELL: &str = "-";

fn pair(label: &str, value: impl Into<String>) -> Vec<String> {
    vec![label.to_string(), value.into()]
}

fn title(label: &str) -> Vec<String> {
    vec![label.to_string()]
}

fn blank() -> Vec<String> {
    Vec::new()
}

/// The 24 rows describing one day.
///
/// Identity, work time, overtime, reason, description and note blocks,
/// separated by single blank rows.
pub fn sheet_rows(view: &DayView, display_name: &str) -> Vec<Vec<String>> {
    let f = view.fields();

    vec![
        title("Identitas"),
        pair("Nama lengkap", display_name),
        blank(),
        pair("Tanggal lembur", view.date_str()),
        blank(),
        title("Waktu Kerja"),
        pair("Jam mulai 1", f.shift1_start),
        pair("Jam selesai 1", f.shift1_end),
        pair("Jam mulai 2", f.shift2_start),
        pair("Jam selesai 2", f.shift2_end),
        pair("Total Waktu Kerja", view.worked_text.clone()),
        blank(),
        title("Tanggal & Waktu Lembur"),
        pair("Jam mulai lembur", f.overtime_start),
        pair("Jam selesai lembur", f.overtime_end),
        pair("Jam mulai lembur 2", UNUSED_CELL),
        pair("Jam selesai lembur 2", UNUSED_CELL),
        pair("Total Lembur", view.overtime_text.clone()),
        blank(),
        pair("Alasan Lembur", f.overtime_reason),
        blank(),
        pair("Deskripsi Pekerjaan", f.overtime_description),
        blank(),
        pair("Catatan Tambahan", f.note),
    ]
}

pub fn is_section_title(row: &[String]) -> bool {
    row.len() == 1 && SECTION_TITLES.contains(&row[0].as_str())
}
