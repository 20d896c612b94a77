use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
        }

        if *print_config {
            if file.exists() {
                let content = fs::read_to_string(&file)?;
                println!("{}", content);
            } else {
                return Err(AppError::Config(format!(
                    "No configuration file found at {} (run `presenza init`)",
                    file.display()
                )));
            }
        }
    }
    Ok(())
}
