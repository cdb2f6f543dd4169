//! timesheet library root.
//! Exposes the CLI parser, the high-level run() function and the modules
//! behind it: time arithmetic, the daily-entry store, export and sync.

pub mod cli;
pub mod config;
pub mod context;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod sync;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use context::AppContext;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &ctx.cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, &ctx.cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, ctx),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Reasons => cli::commands::reasons::handle(&ctx.cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Sync { .. } => cli::commands::sync::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, &ctx.cfg),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ database override from the command line
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db).to_string_lossy().to_string();
    }
    tracing::debug!(?cfg, "configuration loaded");

    // 4️⃣ hand over to the dispatcher
    let mut ctx = AppContext::new(cfg);
    dispatch(&cli, &mut ctx)
}
