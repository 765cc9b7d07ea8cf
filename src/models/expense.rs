use chrono::NaiveDate;
use serde::Serialize;

/// A single expense row as returned by the store, with the category and
/// user display names already joined in. Expenses are immutable once
/// recorded; `created_at` is assigned by the store at insert time and is
/// only used as an ordering tie-breaker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,      // ⇔ expenses.date (TEXT "YYYY-MM-DD")
    pub title: String,
    pub amount: f64,          // ⇔ expenses.amount (REAL, > 0)
    pub created_at: String,   // ⇔ expenses.created_at (TEXT, ISO 8601)
    pub category_name: String, // joined from categories.name
    pub user_name: String,     // joined from users.name
}

impl Expense {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
