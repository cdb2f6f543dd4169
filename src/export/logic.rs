use crate::config::Config;
use crate::core::month::load_month;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::prompt::confirm;
use std::path::{Path, PathBuf};

/// High-level export of one month.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every day of `year`-`month` to `file`.
    ///
    /// `file` must be absolute. Days without a row are exported as empty
    /// templates so the month is always complete.
    pub fn export<S: EntryStore + ?Sized>(
        store: &S,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        (year, month): (i32, u32),
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }
        if !format.matches_extension(path) {
            warning(format!(
                "'{}' does not end in .{}; writing {} anyway.",
                path.display(),
                format.as_str(),
                format.as_str()
            ));
        }

        Self::check_target(path, force)?;

        let views = load_month(store, year, month)?;
        tracing::debug!(
            year,
            month,
            days = views.len(),
            format = format.as_str(),
            "exporting month"
        );

        match format {
            ExportFormat::Xlsx => export_xlsx(&views, &cfg.default_name, path)?,
            ExportFormat::Csv => export_csv(&views, path)?,
            ExportFormat::Json => export_json(&views, path)?,
        }

        Ok(path.to_path_buf())
    }

    /// An existing file is only replaced with `force` or the user's consent.
    fn check_target(path: &Path, force: bool) -> AppResult<()> {
        if !path.exists() || force {
            return Ok(());
        }

        warning(format!("The file '{}' already exists.", path.display()));
        if confirm("Overwrite?")? {
            Ok(())
        } else {
            Err(AppError::Export(
                "Export cancelled: existing file not overwritten".into(),
            ))
        }
    }
}
