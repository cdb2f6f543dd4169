use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path) -> AppResult<()> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        println!("{}", content);
        Ok(())
    }

    /// Open the config file in `editor`, `$EDITOR`, `$VISUAL`, or the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let ed = editor.clone().unwrap_or_else(|| default_editor.clone());

        let status = Command::new(&ed).arg(path).status();
        match status {
            Ok(s) if s.success() => Ok(()),
            _ if ed != default_editor => {
                tracing::warn!(
                    editor = %ed,
                    fallback = %default_editor,
                    "editor failed, falling back"
                );
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!(
                                "editor '{default_editor}' exited with {s}"
                            )))
                        }
                    })
            }
            Ok(s) => Err(AppError::Config(format!("editor '{ed}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot start editor '{ed}': {e}"))),
        }
    }
}
