use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::Table;
use crate::utils::validate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Users { add } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if let Some(name) = add {
            let name = validate::validate_non_empty(name, "User name")?;
            let id = queries::create_user(&pool, &name)?;
            success(format!("Created user '{}' with id {}", name, id));
            return Ok(());
        }

        let users = queries::get_all_users(&pool)?;
        if users.is_empty() {
            println!("No users recorded yet.");
            return Ok(());
        }

        let rows: Vec<Vec<String>> = users
            .iter()
            .map(|u| vec![u.id.to_string(), u.name.clone()])
            .collect();
        let table = Table::fitted(&["ID", "Name"], rows);
        print!("{}", table.render());
    }
    Ok(())
}
