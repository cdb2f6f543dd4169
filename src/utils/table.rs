//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            width: UnicodeWidthStr::width(header),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row and grow column widths to fit it (long cells are cut at `max`).
    pub fn add_row(&mut self, row: Vec<String>, max: usize) {
        let row: Vec<String> = row.into_iter().map(|c| truncate(&c, max)).collect();
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(UnicodeWidthStr::width(cell.as_str()));
        }
        self.rows.push(row);
    }

    /// Render with a per-cell decorator applied after padding, so colour
    /// codes never disturb the alignment.
    pub fn render_with<F>(&self, decorate: F) -> String
    where
        F: Fn(usize, usize, &str) -> String,
    {
        let mut out = String::new();

        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push_str("  ");
        }
        out.push('\n');

        let total: usize = self.columns.iter().map(|c| c.width + 2).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for (r, row) in self.rows.iter().enumerate() {
            for (c, col) in self.columns.iter().enumerate() {
                let cell = row.get(c).map(String::as_str).unwrap_or("");
                out.push_str(&decorate(r, c, &pad_right(cell, col.width)));
                out.push_str("  ");
            }
            out.push('\n');
        }

        out
    }
}

/// Pad on the right to a display width (not a byte length).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

fn truncate(s: &str, max: usize) -> String {
    let one_line = s.replace(['\n', '\r'], " ");
    if one_line.chars().count() <= max {
        return one_line;
    }
    let mut cut: String = one_line.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
