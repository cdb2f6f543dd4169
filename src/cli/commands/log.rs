use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    match cmd {
        Commands::Log { print: true } => {
            let pool = ctx.open_db()?;
            LogLogic::print_log(&pool)
        }
        _ => {
            info("Nothing to do: use `timesheet log --print`.");
            Ok(())
        }
    }
}
