use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::db::log::record_or_warn;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::resolve_month;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let (year, m) = resolve_month(month)?;
        let pool = ctx.open_db()?;
        let path = ExportLogic::export(&pool, &ctx.cfg, format, file, (year, m), *force)?;

        record_or_warn(
            &pool.conn,
            "export",
            &format!("{year:04}-{m:02}"),
            &format!("Exported {} to {}", format.as_str(), path.display()),
        );
    }
    Ok(())
}
