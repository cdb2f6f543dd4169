//! Yes/no questions on the terminal.

use crate::errors::AppResult;
use std::io::{self, BufRead, Write};

/// Ask `question` and read one answer line from stdin.
///
/// Only `y` / `yes` count as consent; an empty line or end of input is "no".
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
