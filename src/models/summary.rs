use super::expense::Expense;
use serde::Serialize;
use std::collections::BTreeMap;

/// Derived report over a list of expenses. Never persisted: recomputed from
/// the input list on every call.
///
/// `user_expenses` keeps each user's rows in the order they appeared in the
/// input list (usually the store's date-descending order).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: usize,
    pub by_category: BTreeMap<String, f64>,
    pub by_user: BTreeMap<String, f64>,
    pub user_expenses: BTreeMap<String, Vec<Expense>>,
}

impl ExpenseSummary {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One line of the percentage breakdown: a category, its summed amount and
/// its share of the overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub amount: f64,
    pub percent: f64,
}
