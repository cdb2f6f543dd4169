use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::entry::EntryLogic;
use crate::errors::AppResult;
use crate::models::day_view::DayView;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_overtime};
use crate::utils::table::pad_right;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Show { date } = cmd {
        let pool = ctx.open_db()?;
        let view = EntryLogic::load(&pool, date.as_deref())?;
        print_day(&view);
    }
    Ok(())
}

/// Print one day as a label/value block.
pub(crate) fn print_day(view: &DayView) {
    header(view.date_str());

    if !view.is_stored() {
        info(format!("No entry saved for {}.", view.date_str()));
        return;
    }

    let f = view.fields();
    let lines = [
        ("Shift 1 start", f.shift1_start),
        ("Shift 1 end", f.shift1_end),
        ("Shift 2 start", f.shift2_start),
        ("Shift 2 end", f.shift2_end),
        ("Worked", view.worked_text.clone()),
        ("Overtime start", f.overtime_start),
        ("Overtime end", f.overtime_end),
        ("Overtime", view.overtime_text.clone()),
        ("Reason", f.overtime_reason),
        ("Description", f.overtime_description),
        ("Note", f.note),
    ];

    for (label, value) in &lines {
        let shown = if value.is_empty() { "-" } else { value.as_str() };
        let cell = match *label {
            "Overtime" => colorize_overtime(shown, view.overtime_minutes),
            _ => colorize_optional(shown),
        };
        println!("  {} {}", pad_right(&format!("{label}:"), 16), cell);
    }
    println!();
}
