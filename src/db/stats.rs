use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let expenses: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
    let users: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    let categories: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;

    println!(
        "{}• Expenses:{} {}{}{}  (users: {}, categories: {})",
        CYAN, RESET, GREEN, expenses, RESET, users, categories
    );

    //
    // 3) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM expenses ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM expenses ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) GRAND TOTAL
    //
    let total: f64 = pool
        .conn
        .query_row("SELECT COALESCE(SUM(amount), 0) FROM expenses", [], |row| {
            row.get(0)
        })?;
    println!("{}• Total recorded:{} {:.2}", CYAN, RESET, total);

    println!();
    Ok(())
}
