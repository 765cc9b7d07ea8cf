use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::Table;
use crate::utils::validate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Categories { add } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let name = validate::validate_non_empty(name, "Category name")?;
            let id = queries::create_category(&pool, &name)?;
            success(format!("Created category '{}' with id {}", name, id));
            return Ok(());
        }

        let categories = queries::get_all_categories(&pool)?;
        if categories.is_empty() {
            println!("No categories available.");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = categories
            .iter()
            .map(|c| vec![c.id.to_string(), c.name.clone()])
            .collect();
        let table = Table::fitted(&["ID", "Name"], rows);
        print!("{}", table.render());
    }
    Ok(())
}
