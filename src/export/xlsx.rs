use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::template::{LONG_TEXT_LABELS, is_section_title, sheet_rows};
use crate::models::day_view::DayView;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const MAX_VALUE_WIDTH: usize = 60;

/// One worksheet per day, named after the date, filled with the sheet template.
pub(crate) fn export_xlsx(views: &[DayView], display_name: &str, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    let title_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid);
    let label_format = Format::new().set_bold();
    let wrap_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);

    for view in views {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(view.date_str())?;

        let rows = sheet_rows(view, display_name);
        let mut widths = [0usize; 2];

        for (r, cells) in rows.iter().enumerate() {
            let row = r as u32;

            if is_section_title(cells) {
                worksheet.write_string_with_format(row, 0, &cells[0], &title_format)?;
                worksheet.write_string_with_format(row, 1, "", &title_format)?;
                widths[0] = widths[0].max(UnicodeWidthStr::width(cells[0].as_str()));
                continue;
            }

            if let [label, value] = cells.as_slice() {
                worksheet.write_string_with_format(row, 0, label, &label_format)?;

                if LONG_TEXT_LABELS.contains(&label.as_str()) {
                    worksheet.write_string_with_format(row, 1, value, &wrap_format)?;
                } else {
                    worksheet.write_string(row, 1, value)?;
                }

                widths[0] = widths[0].max(UnicodeWidthStr::width(label.as_str()));
                let longest_line = value
                    .lines()
                    .map(UnicodeWidthStr::width)
                    .max()
                    .unwrap_or(0);
                widths[1] = widths[1].max(longest_line.min(MAX_VALUE_WIDTH));
            }
        }

        worksheet.set_column_width(0, widths[0] as f64 + 2.0)?;
        worksheet.set_column_width(1, widths[1].max(12) as f64 + 2.0)?;
    }

    if views.is_empty() {
        workbook.add_worksheet().write_string(0, 0, "No data available")?;
    }

    workbook.save(path)?;

    notify_export_success("XLSX", path, views.len());
    Ok(())
}
