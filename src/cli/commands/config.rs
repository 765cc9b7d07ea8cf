use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                println!("{}", fs::read_to_string(&path)?);
            } else {
                println!("No configuration file found at {}", path.display());
            }
        } else {
            println!("Config file : {}", Config::config_file().display());
            println!("Database    : {}", cfg.database);
            println!("Currency    : {}", cfg.currency);
            println!("Default category : {}", cfg.default_category);
            if !cfg.default_user.is_empty() {
                println!("Default user     : {}", cfg.default_user);
            }
        }
    }
    Ok(())
}
