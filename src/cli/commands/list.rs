use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::month::{load_month, month_totals};
use crate::core::time_calc::format_duration;
use crate::errors::AppResult;
use crate::models::day_view::DayView;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_optional, colorize_overtime};
use crate::utils::date::{month_name, resolve_month};
use crate::utils::table::{Column, Table};

const MAX_TEXT_WIDTH: usize = 24;

const HEADERS: [&str; 12] = [
    "Date", "In 1", "Out 1", "In 2", "Out 2", "Worked", "OT in", "OT out", "Overtime", "Reason",
    "Description", "Note",
];

const OVERTIME_COL: usize = 8;

fn to_row(v: &DayView) -> Vec<String> {
    let f = v.fields();
    vec![
        v.date_str(),
        f.shift1_start,
        f.shift1_end,
        f.shift2_start,
        f.shift2_end,
        v.worked_text.clone(),
        f.overtime_start,
        f.overtime_end,
        v.overtime_text.clone(),
        f.overtime_reason,
        f.overtime_description,
        f.note,
    ]
}

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { month } = cmd {
        let (year, m) = resolve_month(month)?;
        let pool = ctx.open_db()?;
        let views = load_month(&pool, year, m)?;

        header(format!("{} {}", month_name(m), year));

        let mut table = Table::new(HEADERS.iter().map(|h| Column::new(h)).collect());
        for v in &views {
            table.add_row(to_row(v), MAX_TEXT_WIDTH);
        }

        let rendered = table.render_with(|r, c, cell| {
            if c == OVERTIME_COL {
                colorize_overtime(cell, views[r].overtime_minutes)
            } else if c == 0 {
                cell.to_string()
            } else {
                colorize_optional(cell)
            }
        });
        print!("{rendered}");

        let (worked, overtime) = month_totals(&views);
        let stored = views.iter().filter(|v| v.is_stored()).count();
        println!();
        println!(
            "Days saved: {}/{} | Worked: {} | Overtime: {}",
            stored,
            views.len(),
            format_duration(worked),
            format_duration(overtime)
        );
    }
    Ok(())
}
