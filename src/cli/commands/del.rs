use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::entry::EntryLogic;
use crate::db::log::record_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::prompt::confirm;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Del { date, yes } = cmd {
        let d = EntryLogic::resolve_date(date.as_deref())?;

        if !*yes {
            warning(format!("The entry for {d} will be removed."));
            if !confirm("Delete it?")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut pool = ctx.open_db()?;
        let (d, removed) = EntryLogic::delete(&mut pool, Some(d.to_string().as_str()))?;

        if removed {
            record_or_warn(&pool.conn, "del", &d.to_string(), "Entry deleted");
            success(format!("Entry deleted for {d}."));
        } else {
            info(format!("No entry for {d}; nothing to delete."));
        }
    }

    Ok(())
}
