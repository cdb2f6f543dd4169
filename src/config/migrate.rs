//! Configuration file upgrades: detect keys added by newer releases and
//! write them back with their defaults.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "default_name",
    "overtime_reasons",
    "spreadsheet_id",
    "credentials_path",
    "sync_delay_ms",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml::from_str::<Value>(&content)? {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

/// Keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String(k.to_string())))
        .collect())
}

/// Keys in the file that this release does not know about.
pub fn unknown_keys(path: &Path) -> AppResult<Vec<String>> {
    let map = read_mapping(path)?;

    Ok(map
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !KNOWN_KEYS.contains(k))
        .map(str::to_string)
        .collect())
}

/// Fill missing keys with their defaults, keeping every existing value
/// (unknown keys included). Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        Config::default().save_to(path)?;
        success(format!("Created configuration file {}", path.display()));
        return Ok(KNOWN_KEYS.to_vec());
    }

    let missing = missing_keys(path)?;
    if missing.is_empty() {
        info("Configuration file is up to date.");
        return Ok(missing);
    }

    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::load_from(path)?)? {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Config("cannot serialize defaults".into())),
    };

    for key in &missing {
        let k = Value::String(key.to_string());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;

    for key in &missing {
        success(format!("Added '{key}' to configuration"));
    }
    Ok(missing)
}
