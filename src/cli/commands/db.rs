use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn step(label: &str) {
    println!("{CYAN}▶ {label}…{RESET}");
}

fn done(label: &str) {
    println!("{GREEN}✔ {label}{RESET}\n");
}

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    step("Running integrity check");

    let mut stmt = pool.conn.prepare("PRAGMA integrity_check;")?;
    let problems: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<_, _>>()?;

    match problems.as_slice() {
        [ok] if ok == "ok" => done("Integrity check passed."),
        _ => {
            println!("{RED}✘ Integrity check failed:{RESET}");
            for p in &problems {
                println!("  - {p}");
            }
            println!();
        }
    }
    Ok(())
}

/// Maintenance actions on the database file, run in a fixed order:
/// migrate, info, check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        info("Nothing to do: use --migrate, --info, --check or --vacuum.");
        return Ok(());
    }

    // schema changes only happen on --migrate / --info, so open raw
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        step("Running migrations");
        run_pending_migrations(&pool.conn)?;
        done("Migration completed.");
    }

    if *show_info {
        run_pending_migrations(&pool.conn)?;
        stats::print_db_info(&pool, &cfg.database)?;
    }

    if *check {
        integrity_check(&pool)?;
    }

    if *vacuum {
        step("Running VACUUM");
        pool.conn.execute_batch("VACUUM;")?;
        done("Vacuum completed.");
    }

    Ok(())
}
