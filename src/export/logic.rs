use crate::db::filter::ExpenseFilter;
use crate::db::pool::DbPool;
use crate::db::queries::fetch_expenses;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExpenseExport;
use crate::ui::messages::warning;

/// High-level export logic: same filtered query path as `list`, written to
/// disk instead of the terminal.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        filter: &ExpenseFilter,
        force: bool,
    ) -> AppResult<()> {
        let path = crate::utils::path::expand_tilde(file);

        if path.exists() && !force {
            return Err(AppError::Export(format!(
                "Output file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        let expenses = fetch_expenses(pool, filter)?;

        if expenses.is_empty() {
            warning("No expenses found for the selected filters.");
            return Ok(());
        }

        let records: Vec<ExpenseExport> = expenses.iter().map(ExpenseExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
        }

        Ok(())
    }
}
