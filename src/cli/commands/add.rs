use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ops;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::format_currency;
use crate::utils::validate;

/// Record a new expense.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        title,
        amount,
        category,
        user,
    } = cmd
    {
        let category = category
            .clone()
            .unwrap_or_else(|| cfg.default_category.clone());

        // --user may be omitted only when the config names a default user.
        let user = match user {
            Some(u) => u.clone(),
            None if !cfg.default_user.is_empty() => cfg.default_user.clone(),
            None => return Err(AppError::EmptyField("User name".to_string())),
        };

        let amount_value = validate::validate_amount(amount)?;

        let pool = DbPool::new(&cfg.database)?;
        let expense_id = ops::record_expense(&pool, date, &category, title, amount, &user)?;

        success(format!("Expense recorded with ID: {}", expense_id));
        println!("  Date:     {}", date.trim());
        println!("  Title:    {}", title.trim());
        println!("  Amount:   {}", format_currency(amount_value, &cfg.currency));
        println!("  Category: {}", category.trim());
        println!("  User:     {}", user.trim());
    }

    Ok(())
}
