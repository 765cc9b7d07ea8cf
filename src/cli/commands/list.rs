use crate::cli::commands::resolve_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ops;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::expense::Expense;
use crate::utils::format_currency;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let expenses = match resolve_filter(&pool, filter)? {
            Some(f) => ops::view_expenses(&pool, &f),
            // Category names were given but none exist: nothing can match.
            None => Vec::new(),
        };

        if expenses.is_empty() {
            println!("No expenses found.");
            return Ok(());
        }

        println!("Found {} expense(s):", expenses.len());
        print_expenses(&expenses, &cfg.currency);
    }
    Ok(())
}

fn print_expenses(expenses: &[Expense], currency: &str) {
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date_str(),
                e.title.clone(),
                format_currency(e.amount, currency),
                e.category_name.clone(),
                e.user_name.clone(),
            ]
        })
        .collect();

    let table = Table::fitted(&["ID", "Date", "Title", "Amount", "Category", "User"], rows);
    print!("{}", table.render());
}
