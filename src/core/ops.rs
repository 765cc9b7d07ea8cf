//! Business layer over the record store.
//!
//! Recording validates everything up front (fail fast, before any store
//! access) and propagates errors. The view operations are read-only: a
//! failing store access is reported and degrades to an empty list so the
//! process can keep accepting commands, while invalid arguments are raised
//! as errors before the query runs.

use crate::db::filter::ExpenseFilter;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::expense::Expense;
use crate::ui::messages::{info, warning};
use crate::utils::validate;
use chrono::NaiveDate;

/// Record a new expense, creating the user and the category on first use.
/// Returns the id of the inserted row.
pub fn record_expense(
    pool: &DbPool,
    date: &str,
    category: &str,
    title: &str,
    amount: &str,
    user_name: &str,
) -> AppResult<i64> {
    let date = validate::validate_date(date)?;
    let amount = validate::validate_amount(amount)?;
    let title = validate::validate_non_empty(title, "Title")?;
    let user_name = validate::validate_non_empty(user_name, "User name")?;
    let category = validate::validate_non_empty(category, "Category")?;

    let user_id = match queries::get_user_by_name(pool, &user_name)? {
        Some(user) => user.id,
        None => {
            let id = queries::create_user(pool, &user_name)?;
            info(format!("Created new user: {}", user_name));
            id
        }
    };

    let category_id = match queries::get_category_by_name(pool, &category)? {
        Some(cat) => cat.id,
        None => {
            let id = queries::create_category(pool, &category)?;
            info(format!("Created new category: {}", category));
            id
        }
    };

    queries::insert_expense(pool, date, category_id, &title, amount, user_id)
}

/// Resolve category display names to ids, case-insensitively.
/// Names with no matching category are warned about and dropped; the
/// returned vec may therefore be empty even for non-empty input.
pub fn resolve_category_ids(pool: &DbPool, names: &[String]) -> AppResult<Vec<i64>> {
    let all = queries::get_all_categories(pool)?;

    let mut ids = Vec::new();
    let mut unknown: Vec<&str> = Vec::new();

    for name in names {
        let wanted = name.trim().to_lowercase();
        match all.iter().find(|c| c.name.to_lowercase() == wanted) {
            Some(cat) => ids.push(cat.id),
            None => unknown.push(name),
        }
    }

    if !unknown.is_empty() {
        warning(format!("Categories not found: {}", unknown.join(", ")));
    }

    Ok(ids)
}

/// The generic conjunctive path every view below composes through.
/// Store failures degrade to an empty list; the failure is reported so the
/// caller can still tell "no rows" from "store down" on stderr.
pub fn view_expenses(pool: &DbPool, filter: &ExpenseFilter) -> Vec<Expense> {
    match queries::fetch_expenses(pool, filter) {
        Ok(expenses) => expenses,
        Err(e) => {
            crate::ui::messages::error(format!("Failed to fetch expenses: {}", e));
            Vec::new()
        }
    }
}

pub fn view_all_expenses(pool: &DbPool) -> Vec<Expense> {
    view_expenses(pool, &ExpenseFilter::default())
}

/// Expenses within an inclusive date range. Either bound may be omitted.
pub fn view_expenses_by_date(
    pool: &DbPool,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
) -> AppResult<Vec<Expense>> {
    validate::validate_date_range(min_date, max_date)?;
    Ok(view_expenses(
        pool,
        &ExpenseFilter::by_date_range(min_date, max_date),
    ))
}

/// Expenses within an inclusive amount range. Either bound may be omitted.
pub fn view_expenses_by_amount(
    pool: &DbPool,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
) -> AppResult<Vec<Expense>> {
    validate::validate_amount_range(min_amount, max_amount)?;
    Ok(view_expenses(
        pool,
        &ExpenseFilter::by_amount_range(min_amount, max_amount),
    ))
}

/// Expenses whose category matches any of the given names.
/// If no name resolves to a stored category the result is empty; this never
/// falls back to "no filter".
pub fn view_expenses_by_category(pool: &DbPool, names: &[String]) -> AppResult<Vec<Expense>> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let ids = resolve_category_ids(pool, names)?;
    if ids.is_empty() {
        warning("No valid categories found.");
        return Ok(Vec::new());
    }

    Ok(view_expenses(pool, &ExpenseFilter::by_categories(ids)))
}

/// Expenses recorded by a single user. A non-positive id is rejected
/// before any query runs.
pub fn view_expenses_by_user(pool: &DbPool, user_id: i64) -> AppResult<Vec<Expense>> {
    if user_id <= 0 {
        return Err(AppError::InvalidUserId(user_id));
    }

    Ok(view_expenses(pool, &ExpenseFilter::by_user(user_id)))
}
