use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::entry::EntryLogic;
use crate::db::log::record_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use super::show::print_day;

/// Save (insert or fully replace) a day.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add { date, fields } = cmd {
        //
        // 1. Validate the date before touching the database
        //
        let d = EntryLogic::resolve_date(date.as_deref())?;
        let fields = fields.clone().into_fields();

        //
        // 2. Warn (never block) on time values that will count as zero
        //
        for (label, raw) in EntryLogic::suspicious_times(&fields) {
            warning(format!(
                "{label} = '{raw}' is not a valid HH:MM time; it will count as 0 minutes."
            ));
        }

        let reason = fields.overtime_reason.trim();
        if !reason.is_empty() && !ctx.cfg.overtime_reasons.iter().any(|r| r == reason) {
            info(format!("Reason '{reason}' is not a preset; saved as free text."));
        }

        //
        // 3. Upsert
        //
        let mut pool = ctx.open_db()?;
        let view = EntryLogic::save(&mut pool, Some(d.to_string().as_str()), fields)?;

        record_or_warn(
            &pool.conn,
            "add",
            &view.date_str(),
            &format!(
                "Saved entry (worked {}, overtime {})",
                view.worked_text, view.overtime_text
            ),
        );

        success(format!("Entry saved for {}.", view.date_str()));
        print_day(&view);
    }

    Ok(())
}
