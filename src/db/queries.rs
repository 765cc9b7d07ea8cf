use crate::db::filter::ExpenseFilter;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::category::Category;
use crate::models::expense::Expense;
use crate::models::user::User;
use chrono::{NaiveDate, Utc};
use rusqlite::{OptionalExtension, Row, params};

pub fn map_expense_row(row: &Row) -> rusqlite::Result<Expense> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(Expense {
        id: row.get("id")?,
        date,
        title: row.get("title")?,
        amount: row.get("amount")?,
        created_at: row.get("created_at")?,
        category_name: row.get("category_name")?,
        user_name: row.get("user_name")?,
    })
}

fn map_user_row(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

fn map_category_row(row: &Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

/// Insert a new user. The name must already be validated (non-empty after
/// trim); uniqueness is enforced by the store.
pub fn create_user(pool: &DbPool, name: &str) -> AppResult<i64> {
    pool.conn
        .execute("INSERT INTO users (name) VALUES (?1)", params![name.trim()])?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn get_user_by_name(pool: &DbPool, name: &str) -> AppResult<Option<User>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, name FROM users WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_user_row).optional()?)
}

pub fn get_all_users(pool: &DbPool) -> AppResult<Vec<User>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, name FROM users ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_user_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn create_category(pool: &DbPool, name: &str) -> AppResult<i64> {
    pool.conn.execute(
        "INSERT INTO categories (name) VALUES (?1)",
        params![name.trim()],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

pub fn get_category_by_name(pool: &DbPool, name: &str) -> AppResult<Option<Category>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, name FROM categories WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_category_row).optional()?)
}

pub fn get_all_categories(pool: &DbPool) -> AppResult<Vec<Category>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, name FROM categories ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_category_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Insert a new expense. `created_at` is assigned here, at insert time;
/// referential integrity of `category_id`/`user_id` is the store's job.
pub fn insert_expense(
    pool: &DbPool,
    date: NaiveDate,
    category_id: i64,
    title: &str,
    amount: f64,
    user_id: i64,
) -> AppResult<i64> {
    let created_at = Utc::now().to_rfc3339();
    pool.conn.execute(
        "INSERT INTO expenses (date, category_id, title, amount, created_at, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            date.format("%Y-%m-%d").to_string(),
            category_id,
            title.trim(),
            amount,
            created_at,
            user_id,
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

/// Execute the single multi-predicate query. Rows come back joined with
/// their category and user display names, ordered date DESC, created_at
/// DESC.
pub fn fetch_expenses(pool: &DbPool, filter: &ExpenseFilter) -> AppResult<Vec<Expense>> {
    let (query, params) = filter.build_query();

    let mut stmt = pool.conn.prepare_cached(&query)?;
    let param_refs: Vec<&dyn rusqlite::ToSql> = params.iter().map(|p| p.as_ref()).collect();
    let rows = stmt.query_map(param_refs.as_slice(), map_expense_row)?;

    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn count_expenses(pool: &DbPool) -> AppResult<i64> {
    let mut stmt = pool.conn.prepare_cached("SELECT COUNT(*) FROM expenses")?;
    let n: i64 = stmt.query_row([], |r| r.get(0))?;
    Ok(n)
}
