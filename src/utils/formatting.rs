//! Formatting utilities used for CLI outputs.

/// Render an amount as currency with two decimal places, e.g. "$12.50".
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

/// Render a percentage with one decimal place, e.g. "37.5%".
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}
