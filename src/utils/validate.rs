//! Input validation for the recording and filtering boundaries.
//! Violations are named errors, raised before any store access.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use regex::Regex;

/// Parse and validate a date string. The shape must be `YYYY-MM-DD` and
/// the date calendar-valid (day count per month, leap years included).
pub fn validate_date(date_str: &str) -> AppResult<NaiveDate> {
    let date_str = date_str.trim();

    if date_str.is_empty() {
        return Err(AppError::EmptyField("Date".to_string()));
    }

    // Shape first, so "2025-1-2" fails with a format message instead of a
    // parser quirk.
    let shape = Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static regex");
    if !shape.is_match(date_str) {
        return Err(AppError::InvalidDate(format!(
            "'{}' must be in YYYY-MM-DD format",
            date_str
        )));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date_str.to_string()))
}

/// Parse and validate an amount string: a finite number, strictly positive.
pub fn validate_amount(amount_str: &str) -> AppResult<f64> {
    let amount_str = amount_str.trim();

    if amount_str.is_empty() {
        return Err(AppError::EmptyField("Amount".to_string()));
    }

    let amount: f64 = amount_str
        .parse()
        .map_err(|_| AppError::InvalidAmount(format!("'{}' is not a number", amount_str)))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "'{}' must be positive",
            amount_str
        )));
    }

    Ok(amount)
}

/// Check that a required field is non-empty after trimming; returns the
/// trimmed value.
pub fn validate_non_empty(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyField(field_name.to_string()));
    }
    Ok(trimmed.to_string())
}

pub fn validate_date_range(min: Option<NaiveDate>, max: Option<NaiveDate>) -> AppResult<()> {
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(AppError::InvalidDateRange(format!(
            "start date {} is after end date {}",
            min, max
        )));
    }
    Ok(())
}

pub fn validate_amount_range(min: Option<f64>, max: Option<f64>) -> AppResult<()> {
    if let Some(min) = min
        && min < 0.0
    {
        return Err(AppError::InvalidAmountRange(
            "minimum amount cannot be negative".to_string(),
        ));
    }
    if let Some(max) = max
        && max < 0.0
    {
        return Err(AppError::InvalidAmountRange(
            "maximum amount cannot be negative".to_string(),
        ));
    }
    if let (Some(min), Some(max)) = (min, max)
        && min > max
    {
        return Err(AppError::InvalidAmountRange(format!(
            "minimum {} is greater than maximum {}",
            min, max
        )));
    }
    Ok(())
}
