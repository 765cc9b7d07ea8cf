use crate::cli::commands::resolve_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        filter,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        match resolve_filter(&pool, filter)? {
            Some(f) => ExportLogic::export(&pool, format.clone(), file, &f, *force)?,
            None => warning("No expenses found for the selected filters."),
        }
    }
    Ok(())
}
