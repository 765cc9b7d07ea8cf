//! Optional-predicate filter for expense queries.
//!
//! Every predicate is independently optional; supplied predicates are ANDed.
//! Clauses and their bound parameters are accumulated in lockstep so the
//! binding order always matches the emission order.

use chrono::NaiveDate;
use rusqlite::ToSql;

/// Filter criteria for `fetch_expenses`. A field left as `None` imposes no
/// constraint; an empty `category_ids` vec means no category restriction.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub category_ids: Vec<i64>,
    pub user_id: Option<i64>,
}

impl ExpenseFilter {
    pub fn by_date_range(min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        Self {
            min_date,
            max_date,
            ..Self::default()
        }
    }

    pub fn by_amount_range(min_amount: Option<f64>, max_amount: Option<f64>) -> Self {
        Self {
            min_amount,
            max_amount,
            ..Self::default()
        }
    }

    pub fn by_categories(category_ids: Vec<i64>) -> Self {
        Self {
            category_ids,
            ..Self::default()
        }
    }

    pub fn by_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Build the full SELECT with JOINed display names, WHERE clauses for
    /// every supplied predicate, and the fixed deterministic ordering:
    /// date descending, then created_at descending (id descending breaks
    /// exact timestamp ties).
    pub fn build_query(&self) -> (String, Vec<Box<dyn ToSql>>) {
        let mut query = String::from(
            "SELECT e.id, e.date, e.title, e.amount, e.created_at, \
                    c.name AS category_name, u.name AS user_name \
             FROM expenses e \
             JOIN categories c ON e.category_id = c.id \
             JOIN users u ON e.user_id = u.id",
        );

        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        // ISO dates are stored as TEXT: string comparison equals
        // chronological comparison.
        if let Some(min_date) = self.min_date {
            conditions.push("e.date >= ?".to_string());
            params.push(Box::new(min_date.format("%Y-%m-%d").to_string()));
        }

        if let Some(max_date) = self.max_date {
            conditions.push("e.date <= ?".to_string());
            params.push(Box::new(max_date.format("%Y-%m-%d").to_string()));
        }

        if let Some(min_amount) = self.min_amount {
            conditions.push("e.amount >= ?".to_string());
            params.push(Box::new(min_amount));
        }

        if let Some(max_amount) = self.max_amount {
            conditions.push("e.amount <= ?".to_string());
            params.push(Box::new(max_amount));
        }

        if !self.category_ids.is_empty() {
            let placeholders = vec!["?"; self.category_ids.len()].join(",");
            conditions.push(format!("e.category_id IN ({})", placeholders));
            for id in &self.category_ids {
                params.push(Box::new(*id));
            }
        }

        if let Some(user_id) = self.user_id {
            conditions.push("e.user_id = ?".to_string());
            params.push(Box::new(user_id));
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY e.date DESC, e.created_at DESC, e.id DESC");

        (query, params)
    }
}
