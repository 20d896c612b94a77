use crate::cli::parser::WorkerCmd;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::{log, workers};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(action: &WorkerCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        WorkerCmd::Add {
            name,
            vacation_days,
        } => {
            let allowance = vacation_days.unwrap_or(cfg.vacation_days_per_year);
            let id = workers::insert_worker(&pool.conn, name, allowance)?;

            log::audit(
                &pool.conn,
                "worker_add",
                &id.to_string(),
                &format!("worker '{}' added ({} vacation days/year)", name, allowance),
            )?;

            success(format!("Worker '{}' added with id {}.", name, id));
        }

        WorkerCmd::List => {
            let all = workers::list_workers(&pool.conn)?;
            if all.is_empty() {
                info("No workers registered.");
            } else {
                println!("{:>4}  {:<24} {:>14}", "Id", "Name", "Vacation days");
                for w in all {
                    println!(
                        "{:>4}  {:<24} {:>14}",
                        w.id, w.name, w.vacation_days_per_year
                    );
                }
            }
        }

        WorkerCmd::Del { id, yes } => {
            let w = workers::get_worker(&pool.conn, *id)?;

            let prompt = format!(
                "Delete worker '{}' (id {})? All sheets and vacation requests will be removed.",
                w.name, w.id
            );
            if !*yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            workers::delete_worker(&pool.conn, *id)?;
            log::audit(
                &pool.conn,
                "worker_del",
                &id.to_string(),
                &format!("worker '{}' deleted", w.name),
            )?;
            success(format!("Worker '{}' deleted.", w.name));
        }
    }

    Ok(())
}
