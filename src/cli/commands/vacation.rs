use crate::cli::parser::VacationCmd;
use crate::config::Config;
use crate::core::vacation::VacationLedger;
use crate::db::pool::DbPool;
use crate::db::{log, vacations, workers};
use crate::errors::AppResult;
use crate::models::vacation::{CountPolicy, VacationStatus};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

pub fn handle(action: &VacationCmd, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        VacationCmd::Request { worker, date: d } => {
            let day = date::require_date(d)?;
            let w = workers::get_worker(&pool.conn, *worker)?;

            let request = VacationLedger::request(&mut pool, &w, day)?;
            let left =
                VacationLedger::days_left(&mut pool, &w, CountPolicy::PendingAndApproved)?;

            log::audit(
                &pool.conn,
                "vacation",
                &day.to_string(),
                &format!("worker {} requested vacation (id {})", w.id, request.id),
            )?;

            success(format!(
                "Vacation requested for {} (request #{}, {} day(s) left).",
                day, request.id, left
            ));
        }

        VacationCmd::Range { worker, start, end } => {
            let s = date::require_date(start)?;
            let e = date::require_date(end)?;
            let w = workers::get_worker(&pool.conn, *worker)?;

            let outcome = VacationLedger::request_range(&mut pool, &w, s, e)?;
            let left =
                VacationLedger::days_left(&mut pool, &w, CountPolicy::PendingAndApproved)?;

            log::audit(
                &pool.conn,
                "vacation",
                &format!("{}..{}", s, e),
                &format!("worker {} requested {} day(s)", w.id, outcome.created.len()),
            )?;

            success(format!(
                "Created {} request(s), {} day(s) left.",
                outcome.created.len(),
                left
            ));
            for (d, reason) in &outcome.failed {
                warning(format!("{} skipped: {}", d, reason));
            }
        }

        VacationCmd::Approve { id } => {
            let request =
                VacationLedger::set_status(&mut pool, *id, VacationStatus::Approved)?;
            log::audit(
                &pool.conn,
                "vacation",
                &request.date.to_string(),
                &format!("request {} approved", id),
            )?;
            success(format!("Request #{} approved ({}).", id, request.date));
        }

        VacationCmd::Reject { id } => {
            let request =
                VacationLedger::set_status(&mut pool, *id, VacationStatus::Rejected)?;
            log::audit(
                &pool.conn,
                "vacation",
                &request.date.to_string(),
                &format!("request {} rejected", id),
            )?;
            success(format!("Request #{} rejected ({}).", id, request.date));
        }

        VacationCmd::Del { id } => {
            let request = VacationLedger::delete(&mut pool, *id)?;
            log::audit(
                &pool.conn,
                "vacation_del",
                &request.date.to_string(),
                &format!("request {} deleted", id),
            )?;
            success(format!(
                "Request #{} deleted, one quota unit restored.",
                id
            ));
        }

        VacationCmd::Balance { worker } => {
            let w = workers::get_worker(&pool.conn, *worker)?;
            let official =
                VacationLedger::days_left(&mut pool, &w, CountPolicy::ApprovedOnly)?;
            let admissible =
                VacationLedger::days_left(&mut pool, &w, CountPolicy::PendingAndApproved)?;

            info(format!(
                "{}: allowance {}, {} left (approved only), {} left counting pending",
                w.name, w.vacation_days_per_year, official, admissible
            ));
        }

        VacationCmd::List { worker } => {
            let w = workers::get_worker(&pool.conn, *worker)?;
            let requests = vacations::list_requests(&pool.conn, w.id)?;

            if requests.is_empty() {
                info(format!("No vacation requests for {}.", w.name));
            } else {
                for r in requests {
                    println!("#{:<4} {}  {}", r.id, r.date, r.status);
                }
            }
        }
    }

    Ok(())
}
