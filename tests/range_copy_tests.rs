use chrono::{NaiveDate, NaiveTime};
use presenza::core::range_copy::{CopyGesture, copy_range};
use presenza::errors::AppError;
use presenza::models::absence::Absence;
use presenza::models::day_entry::DayEntry;
use presenza::models::month::MonthLedger;

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// June 2025: the 1st is a Sunday, 2..6 Mon-Fri, 7-8 weekend, 9..13 Mon-Fri.
fn june_with_hours_on(day: u32) -> MonthLedger {
    let mut ledger = MonthLedger::blank(1, 2025, 6);
    let mut e = DayEntry::empty(day);
    e.morning_in = t("09:00");
    e.morning_out = t("13:00");
    e.afternoon_in = t("14:00");
    e.afternoon_out = t("18:00");
    ledger.set_day(e);
    ledger
}

#[test]
fn gesture_completes_on_second_click() {
    let mut g = CopyGesture::new();
    assert_eq!(g.click(3), None);
    assert_eq!(g.click(10), Some((3, 10)));
    // Machine resets after yielding a pair.
    assert_eq!(g, CopyGesture::Idle);
    assert_eq!(g.click(5), None);
    g.cancel();
    assert_eq!(g, CopyGesture::Idle);
    assert_eq!(g.click(8), None);
}

#[test]
fn hours_copy_skips_weekends() {
    let mut ledger = june_with_hours_on(2);
    let today = d(2025, 6, 30);

    let outcome = copy_range(&mut ledger, 2, 10, today, 23).unwrap();

    // 3,4,5,6 then 9,10; the 7th and 8th stay untouched.
    assert_eq!(outcome.affected, 6);
    assert!(!outcome.quota_stopped);
    assert!(ledger.day(7).unwrap().is_blank());
    assert!(ledger.day(8).unwrap().is_blank());
    assert_eq!(ledger.day(9).unwrap().total_minutes, 480);
    assert_eq!(ledger.day(10).unwrap().total_minutes, 480);
}

#[test]
fn hours_copy_skips_future_days() {
    let mut ledger = june_with_hours_on(2);
    let today = d(2025, 6, 4); // Wednesday

    let outcome = copy_range(&mut ledger, 2, 10, today, 23).unwrap();

    assert_eq!(outcome.affected, 2); // 3rd and 4th only
    assert!(ledger.day(5).unwrap().is_blank());
    assert!(ledger.day(10).unwrap().is_blank());
}

#[test]
fn backward_copy_covers_the_span_below_the_source() {
    let mut ledger = june_with_hours_on(12);
    let today = d(2025, 6, 30);

    let outcome = copy_range(&mut ledger, 12, 9, today, 23).unwrap();

    // Range 10..=12 minus the source itself.
    assert_eq!(outcome.affected, 2);
    assert_eq!(ledger.day(10).unwrap().total_minutes, 480);
    assert_eq!(ledger.day(11).unwrap().total_minutes, 480);
    assert!(ledger.day(9).unwrap().is_blank());
}

#[test]
fn vacation_copy_consumes_quota_and_stops_silently() {
    let mut ledger = MonthLedger::blank(1, 2025, 6);
    let mut src = DayEntry::empty(2);
    src.absence = Absence::Vacation;
    ledger.set_day(src);

    // One unit left, three weekday candidates (3,4,5).
    let outcome = copy_range(&mut ledger, 2, 5, d(2025, 6, 30), 1).unwrap();

    assert_eq!(outcome.affected, 1);
    assert!(outcome.quota_stopped);
    assert_eq!(ledger.day(3).unwrap().absence, Absence::Vacation);
    assert_eq!(ledger.day(4).unwrap().absence, Absence::None);
    assert_eq!(ledger.day(5).unwrap().absence, Absence::None);
}

#[test]
fn already_vacation_days_do_not_consume_quota() {
    let mut ledger = MonthLedger::blank(1, 2025, 6);
    for day in [2, 3] {
        let mut e = DayEntry::empty(day);
        e.absence = Absence::Vacation;
        ledger.set_day(e);
    }

    // Day 3 is already vacation, so one unit reaches day 4.
    let outcome = copy_range(&mut ledger, 2, 4, d(2025, 6, 30), 1).unwrap();

    assert_eq!(outcome.affected, 2);
    assert!(!outcome.quota_stopped);
    assert_eq!(ledger.day(4).unwrap().absence, Absence::Vacation);
}

#[test]
fn vacation_copy_reaches_into_the_future() {
    let mut ledger = MonthLedger::blank(1, 2025, 6);
    let mut src = DayEntry::empty(2);
    src.absence = Absence::Vacation;
    ledger.set_day(src);

    // Absence sources ignore the future cutoff.
    let outcome = copy_range(&mut ledger, 2, 4, d(2025, 6, 2), 23).unwrap();
    assert_eq!(outcome.affected, 2);
}

#[test]
fn other_absences_overwrite_without_justification() {
    let mut ledger = MonthLedger::blank(1, 2025, 6);
    let mut src = DayEntry::empty(2);
    src.absence = Absence::Medical;
    src.justification = Some("certificate.pdf".into());
    ledger.set_day(src);

    let outcome = copy_range(&mut ledger, 2, 4, d(2025, 6, 30), 0).unwrap();

    assert_eq!(outcome.affected, 2);
    for day in [3, 4] {
        let e = ledger.day(day).unwrap();
        assert_eq!(e.absence, Absence::Medical);
        assert_eq!(e.justification, None);
    }
}

#[test]
fn degenerate_and_invalid_sources_are_rejected() {
    let today = d(2025, 6, 30);

    let mut ledger = june_with_hours_on(2);
    assert!(matches!(
        copy_range(&mut ledger, 2, 2, today, 23),
        Err(AppError::EmptyCopyRange)
    ));
    assert!(matches!(
        copy_range(&mut ledger, 0, 5, today, 23),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        copy_range(&mut ledger, 2, 31, today, 23),
        Err(AppError::InvalidDate(_))
    ));

    // Blank source has nothing to propagate.
    let mut blank = MonthLedger::blank(1, 2025, 6);
    assert!(matches!(
        copy_range(&mut blank, 2, 5, today, 23),
        Err(AppError::EditRestricted(_))
    ));

    // Inconsistent hours are not propagated either.
    let mut bad = MonthLedger::blank(1, 2025, 6);
    let mut e = DayEntry::empty(2);
    e.morning_in = t("10:00");
    e.morning_out = t("09:00");
    bad.set_day(e);
    assert!(matches!(
        copy_range(&mut bad, 2, 5, today, 23),
        Err(AppError::EditRestricted(_))
    ));
}
