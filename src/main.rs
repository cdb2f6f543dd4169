//! timesheet main entrypoint.

use timesheet::run;
use timesheet::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
