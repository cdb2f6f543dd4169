use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys, unknown_keys};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            if path.exists() {
                println!("📄 Current configuration ({}):\n", path.display());
                ConfigLogic::print(&path)?;
            } else {
                info(format!("{} not found, showing defaults:\n", path.display()));
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!("{} does not exist (run `timesheet init`)", path.display()));
            } else {
                let missing = missing_keys(&path)?;
                let unknown = unknown_keys(&path)?;

                if missing.is_empty() && unknown.is_empty() {
                    success("Configuration file is complete.");
                }
                for k in missing {
                    warning(format!("Missing field: {k} (run `timesheet config --migrate`)"));
                }
                for k in unknown {
                    warning(format!("Unknown field: {k}"));
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            migrate_config_file(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                cfg.save_to(&path)?;
            }
            ConfigLogic::edit(&path, editor)?;
            success(format!("Configuration file edited: {}", path.display()));
        }
    }

    Ok(())
}
