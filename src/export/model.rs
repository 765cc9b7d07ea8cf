use crate::models::expense::Expense;
use serde::Serialize;

/// Flat record shape for exporting expenses.
#[derive(Serialize, Clone, Debug)]
pub struct ExpenseExport {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub user: String,
    pub created_at: String,
}

impl From<&Expense> for ExpenseExport {
    fn from(e: &Expense) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            title: e.title.clone(),
            amount: e.amount,
            category: e.category_name.clone(),
            user: e.user_name.clone(),
            created_at: e.created_at.clone(),
        }
    }
}
