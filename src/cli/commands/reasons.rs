use crate::config::Config;
use crate::errors::AppResult;

/// Print the preset overtime reasons, numbered.
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("Preset overtime reasons (any other text is accepted too):\n");
    for (i, reason) in cfg.overtime_reasons.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, reason);
    }
    Ok(())
}
