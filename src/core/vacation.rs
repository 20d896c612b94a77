//! Vacation ledger: quota-checked admission of single-day requests and
//! their mirroring into the owner's month sheet.

use crate::core::calendar;
use crate::db::pool::DbPool;
use crate::db::{queries, vacations};
use crate::errors::{AppError, AppResult};
use crate::models::absence::Absence;
use crate::models::day_entry::DayEntry;
use crate::models::vacation::{CountPolicy, VacationRequest, VacationStatus};
use crate::models::worker::Worker;
use chrono::{Datelike, NaiveDate};

pub struct VacationLedger;

/// Result of a batch range submission. Partial success is allowed: dates
/// that fail stay failed, dates already committed stay committed.
#[derive(Debug, Default)]
pub struct RangeOutcome {
    pub created: Vec<NaiveDate>,
    pub failed: Vec<(NaiveDate, String)>,
}

impl VacationLedger {
    /// Remaining allowance under the given counting policy.
    pub fn days_left(pool: &mut DbPool, worker: &Worker, policy: CountPolicy) -> AppResult<i64> {
        let used = vacations::count_requests(&pool.conn, worker.id, policy)?;
        Ok(worker.vacation_days_per_year - used)
    }

    /// Admit a new single-day request.
    ///
    /// Fails on duplicates and on an exhausted quota (admission counts
    /// pending as already reserved). On success the request is created
    /// `pending` and the owner's month sheet day is flagged `vacation`.
    pub fn request(
        pool: &mut DbPool,
        worker: &Worker,
        date: NaiveDate,
    ) -> AppResult<VacationRequest> {
        if calendar::is_weekend(date) {
            return Err(AppError::EditRestricted(format!(
                "{} falls on a weekend",
                date
            )));
        }

        if vacations::find_by_worker_and_date(&pool.conn, worker.id, date)?.is_some() {
            return Err(AppError::DuplicateRequest(date.to_string()));
        }

        let left = Self::days_left(pool, worker, CountPolicy::PendingAndApproved)?;
        if left <= 0 {
            return Err(AppError::QuotaExceeded(format!(
                "no vacation days left for {}",
                worker.name
            )));
        }

        let request = vacations::insert_request(&pool.conn, worker.id, date)?;
        Self::mirror_vacation_day(pool, worker.id, date)?;
        Ok(request)
    }

    /// Submit one request per calendar date from `start` to `end`
    /// inclusive. Each date is attempted independently; failures
    /// (duplicate, quota, weekend) are collected, not fatal.
    pub fn request_range(
        pool: &mut DbPool,
        worker: &Worker,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<RangeOutcome> {
        if end < start {
            return Err(AppError::InvalidPeriod(format!("{}:{}", start, end)));
        }

        let mut outcome = RangeOutcome::default();
        for date in calendar::dates_between(start, end) {
            match Self::request(pool, worker, date) {
                Ok(_) => outcome.created.push(date),
                Err(e) => outcome.failed.push((date, e.to_string())),
            }
        }
        Ok(outcome)
    }

    /// `pending -> approved` or `pending -> rejected`; every other
    /// transition is invalid. Rejection frees the day: the mirrored
    /// vacation flag is cleared and, since rejected rows count under
    /// neither policy, the quota unit is released immediately.
    pub fn set_status(
        pool: &mut DbPool,
        id: i64,
        status: VacationStatus,
    ) -> AppResult<VacationRequest> {
        let request = vacations::get_request(&pool.conn, id)?;

        if request.status != VacationStatus::Pending {
            return Err(AppError::InvalidTransition(format!(
                "request {} is already {}",
                id, request.status
            )));
        }
        if status == VacationStatus::Pending {
            return Err(AppError::InvalidTransition(
                "cannot move a request back to pending".into(),
            ));
        }

        vacations::update_status(&pool.conn, id, status)?;
        if status == VacationStatus::Rejected {
            Self::clear_vacation_day(pool, request.worker_id, request.date)?;
        }

        vacations::get_request(&pool.conn, id)
    }

    /// Remove a request regardless of its status, restoring one quota
    /// unit and clearing the mirrored day flag.
    pub fn delete(pool: &mut DbPool, id: i64) -> AppResult<VacationRequest> {
        let request = vacations::get_request(&pool.conn, id)?;
        vacations::delete_request(&pool.conn, id)?;
        Self::clear_vacation_day(pool, request.worker_id, request.date)?;
        Ok(request)
    }

    fn mirror_vacation_day(pool: &mut DbPool, worker_id: i64, date: NaiveDate) -> AppResult<()> {
        let mut ledger =
            queries::load_or_blank(&pool.conn, worker_id, date.year(), date.month())?;
        let mut entry = DayEntry::empty(date.day());
        entry.absence = Absence::Vacation;
        ledger.set_day(entry);
        queries::save_month(&mut pool.conn, &ledger)
    }

    fn clear_vacation_day(pool: &mut DbPool, worker_id: i64, date: NaiveDate) -> AppResult<()> {
        let mut ledger =
            queries::load_or_blank(&pool.conn, worker_id, date.year(), date.month())?;
        let flagged = ledger
            .day(date.day())
            .map(|d| d.absence == Absence::Vacation)
            .unwrap_or(false);
        if flagged {
            ledger.set_day(DayEntry::empty(date.day()));
            queries::save_month(&mut pool.conn, &ledger)?;
        }
        Ok(())
    }
}
