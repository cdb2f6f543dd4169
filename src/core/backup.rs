//! `timesheet backup`: snapshot of the database, optionally zipped.

use crate::config::Config;
use crate::db::log::record_or_warn;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::prompt::confirm;
use rusqlite::Connection;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

pub struct BackupLogic;

impl BackupLogic {
    /// Write a consistent copy of the database to `dest_file`.
    ///
    /// The copy is taken with `VACUUM INTO` into a staging file next to the
    /// target, then renamed (or zipped) into place. A target that resolves to
    /// the live database is refused. Returns the final path, or `None` when
    /// the user declined to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Other(format!(
                "Database not found: {} (run `timesheet init`)",
                src.display()
            )));
        }

        let zip_target = compress.then(|| dest.with_extension("zip"));
        let final_path = zip_target.clone().unwrap_or_else(|| dest.to_path_buf());

        for target in [dest, final_path.as_path()] {
            if same_file(src, target) {
                return Err(AppError::Other(format!(
                    "Backup target '{}' is the live database",
                    target.display()
                )));
            }
        }

        if final_path.exists() && !force {
            warning(format!("The file '{}' already exists.", final_path.display()));
            if !confirm("Overwrite?")? {
                info("Backup cancelled by user.");
                return Ok(None);
            }
        }

        if let Some(parent) = final_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let staging = staging_path(&final_path);
        // VACUUM INTO refuses to write over an existing file
        if staging.exists() {
            fs::remove_file(&staging)?;
        }

        let conn = Connection::open(src)?;
        conn.execute("VACUUM INTO ?1", [staging.to_string_lossy().into_owned()])?;
        tracing::debug!(
            src = %src.display(),
            staging = %staging.display(),
            "database snapshot written"
        );

        let placed = match &zip_target {
            Some(zip_path) => zip_file(&staging, &entry_name(dest), zip_path),
            None => fs::rename(&staging, dest).map_err(AppError::from),
        };
        if staging.exists()
            && let Err(e) = fs::remove_file(&staging)
        {
            warning(format!("Failed to remove staging file: {e}"));
        }
        placed?;

        success(format!("Backup created: {}", final_path.display()));
        record_or_warn(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress { "Backup created (zip)" } else { "Backup created" },
        );

        Ok(Some(final_path))
    }
}

/// Both paths exist and resolve to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Hidden sibling of `target` that receives the raw snapshot.
fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup".to_string());
    target.with_file_name(format!(".{name}.partial"))
}

fn entry_name(dest: &Path) -> String {
    dest.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "timesheet.sqlite".to_string())
}

/// Store `src` as the single deflated entry `entry_name` of a new archive.
fn zip_file(src: &Path, entry_name: &str, zip_path: &Path) -> AppResult<()> {
    let mut zip = ZipWriter::new(File::create(zip_path)?);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(entry_name, options).map_err(io::Error::other)?;
    io::copy(&mut File::open(src)?, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
