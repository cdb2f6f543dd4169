use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::month::load_month;
use crate::db::log::record_or_warn;
use crate::errors::AppResult;
use crate::export::template::sheet_rows;
use crate::sync::{SyncEvent, SyncLogic, SyncOptions};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::resolve_month;
use std::time::Duration;

pub fn handle(cmd: &Commands, ctx: &mut AppContext) -> AppResult<()> {
    if let Commands::Sync {
        month,
        delay_ms,
        dry_run,
    } = cmd
    {
        let (year, m) = resolve_month(month)?;
        let label = format!("{m}/{year}");

        let pool = ctx.open_db()?;
        let views = load_month(&pool, year, m)?;

        if *dry_run {
            for v in &views {
                let rows = sheet_rows(v, &ctx.cfg.default_name);
                let state = if v.is_stored() { "saved" } else { "empty" };
                println!("{}  {} rows  ({state})", v.date_str(), rows.len());
            }
            info(format!("Dry run: {} tab(s) would be written for {label}.", views.len()));
            return Ok(());
        }

        let delay = Duration::from_millis(delay_ms.unwrap_or(ctx.cfg.sync_delay_ms));
        let options = SyncOptions::with_delay(delay);
        let display_name = ctx.cfg.default_name.clone();

        info(format!("Syncing Google Sheet for {label}…"));

        let client = ctx.sheets()?;
        let result = SyncLogic::sync_month(client, &views, &display_name, &options, |ev| {
            if let SyncEvent::Writing(d) = ev {
                println!("  ↻ Sync {d}...");
            }
        });

        match result {
            Ok(report) => {
                let msg = format!("Synced {} day(s) for {label}", report.synced.len());
                record_or_warn(&pool.conn, "sync", &format!("{year:04}-{m:02}"), &msg);
                if report.cancelled {
                    warning(format!("{msg} (cancelled)"));
                } else {
                    success(format!("Google Sheet sync completed ({label})"));
                }
                Ok(())
            }
            Err(e) => {
                record_or_warn(&pool.conn, "sync", &format!("{year:04}-{m:02}"), &e.to_string());
                Err(e)
            }
        }
    } else {
        Ok(())
    }
}
