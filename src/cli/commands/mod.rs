pub mod add;
pub mod categories;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod summary;
pub mod users;

use crate::cli::parser::FilterOpts;
use crate::core::ops;
use crate::db::filter::ExpenseFilter;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::validate;

/// Turn CLI filter flags into an `ExpenseFilter`.
///
/// Validation failures (malformed dates, inverted ranges, non-positive user
/// id) are raised before any query runs. Returns `Ok(None)` when category
/// names were supplied but none of them resolved: nothing can match, and
/// the caller must show an empty result instead of dropping the filter.
pub fn resolve_filter(pool: &DbPool, opts: &FilterOpts) -> AppResult<Option<ExpenseFilter>> {
    let min_date = opts
        .from
        .as_deref()
        .map(validate::validate_date)
        .transpose()?;
    let max_date = opts.to.as_deref().map(validate::validate_date).transpose()?;
    validate::validate_date_range(min_date, max_date)?;
    validate::validate_amount_range(opts.min, opts.max)?;

    if let Some(user_id) = opts.user_id
        && user_id <= 0
    {
        return Err(AppError::InvalidUserId(user_id));
    }

    let category_ids = if opts.categories.is_empty() {
        Vec::new()
    } else {
        let ids = ops::resolve_category_ids(pool, &opts.categories)?;
        if ids.is_empty() {
            return Ok(None);
        }
        ids
    };

    Ok(Some(ExpenseFilter {
        min_date,
        max_date,
        min_amount: opts.min,
        max_amount: opts.max,
        category_ids,
        user_id: opts.user_id,
    }))
}
