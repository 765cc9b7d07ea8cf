//! Aggregation engine: reduce a list of expense rows to a summary.
//!
//! Pure over its input; the only store access is the `summary_of_all`
//! convenience path, whose failure degrades to the empty summary like any
//! other read.

use crate::db::pool::DbPool;
use crate::models::expense::Expense;
use crate::models::summary::{CategoryShare, ExpenseSummary};

/// Compute totals and breakdowns for a (possibly already filtered) list of
/// expenses. Empty input yields zeroed totals and empty maps; rows are
/// appended to `user_expenses` in input order.
pub fn calculate_summary(expenses: &[Expense]) -> ExpenseSummary {
    let mut summary = ExpenseSummary::default();

    if expenses.is_empty() {
        return summary;
    }

    summary.count = expenses.len();

    for expense in expenses {
        summary.total += expense.amount;

        *summary
            .by_category
            .entry(expense.category_name.clone())
            .or_insert(0.0) += expense.amount;

        *summary
            .by_user
            .entry(expense.user_name.clone())
            .or_insert(0.0) += expense.amount;

        summary
            .user_expenses
            .entry(expense.user_name.clone())
            .or_default()
            .push(expense.clone());
    }

    summary
}

/// Summary over every recorded expense. A failing store access yields the
/// empty summary instead of an error.
pub fn summary_of_all(pool: &DbPool) -> ExpenseSummary {
    let expenses = crate::core::ops::view_all_expenses(pool);
    calculate_summary(&expenses)
}

/// Percentage-of-total breakdown per category, sorted by summed amount
/// descending (name ascending on equal amounts). Only meaningful when the
/// total is positive: an empty or zero-total summary yields no breakdown
/// at all rather than dividing by zero.
pub fn category_percentages(summary: &ExpenseSummary) -> Vec<CategoryShare> {
    if summary.total <= 0.0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = summary
        .by_category
        .iter()
        .map(|(name, amount)| CategoryShare {
            name: name.clone(),
            amount: *amount,
            percent: (amount / summary.total) * 100.0,
        })
        .collect();

    shares.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });

    shares
}
