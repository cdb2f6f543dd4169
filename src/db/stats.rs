use crate::db::pool::DbPool;
use crate::db::queries::{count_entries, first_and_last_date};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ENTRIES
    //
    let count = count_entries(&pool.conn)?;
    println!("{}• Stored days:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) DATE RANGE
    //
    let bounds = first_and_last_date(&pool.conn)?;
    let (fmt_first, fmt_last) = match &bounds {
        Some((f, l)) => (f.clone(), l.clone()),
        None => (format!("{GREY}--{RESET}"), format!("{GREY}--{RESET}")),
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) COVERAGE
    //
    if let Some((f, l)) = bounds
        && let (Ok(d1), Ok(d2)) = (
            NaiveDate::parse_from_str(&f, "%Y-%m-%d"),
            NaiveDate::parse_from_str(&l, "%Y-%m-%d"),
        )
    {
        let days = (d2 - d1).num_days() + 1;
        let coverage = count as f64 * 100.0 / days.max(1) as f64;
        println!("{}• Coverage:{} {:.1}% of days in range", CYAN, RESET, coverage);
    }

    println!();
    Ok(())
}
