use crate::cli::commands::resolve_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ops;
use crate::core::summary::{calculate_summary, category_percentages};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::summary::ExpenseSummary;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::format_currency;
use crate::utils::formatting::format_percent;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { filter } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let expenses = match resolve_filter(&pool, filter)? {
            Some(f) => ops::view_expenses(&pool, &f),
            None => Vec::new(),
        };

        let summary = calculate_summary(&expenses);
        print_summary(&summary, &cfg.currency);
    }
    Ok(())
}

fn print_summary(summary: &ExpenseSummary, currency: &str) {
    println!("\n{}=== EXPENSE SUMMARY ==={}", CYAN, RESET);

    //
    // 1) EACH USER'S EXPENSES
    //
    if !summary.user_expenses.is_empty() {
        println!("\nEXPENSES BY USER:");

        for (user, expenses) in &summary.user_expenses {
            println!("\n{}'s expenses:", user);

            let rows: Vec<Vec<String>> = expenses
                .iter()
                .map(|e| {
                    vec![
                        e.date_str(),
                        e.title.clone(),
                        format_currency(e.amount, currency),
                        e.category_name.clone(),
                    ]
                })
                .collect();

            let table = Table::fitted(&["Date", "Title", "Amount", "Category"], rows);
            print!("{}", table.render());

            let user_total = summary.by_user.get(user).copied().unwrap_or(0.0);
            println!(
                "TOTAL: {} over {} expense(s)",
                format_currency(user_total, currency),
                expenses.len()
            );
        }
    }

    //
    // 2) OVERALL TOTALS
    //
    println!("\nOVERALL SUMMARY:");
    println!("Total Expenses: {}", format_currency(summary.total, currency));
    println!("Number of Expenses: {}", summary.count);

    //
    // 3) PERCENTAGE BREAKDOWN BY CATEGORY
    //
    // Omitted entirely for a zero total: there is nothing to divide by.
    let shares = category_percentages(summary);
    if !shares.is_empty() {
        println!("\nCATEGORY BREAKDOWN:");
        for share in shares {
            println!(
                "  {}: {} ({})",
                share.name,
                format_currency(share.amount, currency),
                format_percent(share.percent)
            );
        }
    }
}
