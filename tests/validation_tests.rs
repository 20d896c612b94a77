use chrono::NaiveTime;
use presenza::core::validate::{validate_day, validate_month};
use presenza::models::absence::Absence;
use presenza::models::day_entry::DayEntry;

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
}

#[test]
fn full_day_computes_both_segments() {
    let mut entry = DayEntry::empty(3);
    entry.morning_in = t("09:00");
    entry.morning_out = t("13:00");
    entry.afternoon_in = t("14:00");
    entry.afternoon_out = t("18:00");

    let result = validate_day(&entry);
    assert_eq!(result.total_minutes, 480);
    assert!(result.is_clean());
}

#[test]
fn over_eight_hours_is_reported_but_still_counted() {
    let mut entry = DayEntry::empty(3);
    entry.morning_in = t("09:00");
    entry.morning_out = t("13:00");
    entry.afternoon_in = t("14:00");
    entry.afternoon_out = t("18:30");

    let result = validate_day(&entry);
    assert_eq!(result.total_minutes, 510);
    assert_eq!(result.errors, vec!["more than 8 hours recorded (8h 30m)"]);
}

#[test]
fn reversed_morning_yields_error_and_zero_minutes() {
    let mut entry = DayEntry::empty(7);
    entry.morning_in = t("10:00");
    entry.morning_out = t("09:00");

    let result = validate_day(&entry);
    assert_eq!(result.total_minutes, 0);
    assert_eq!(result.errors, vec!["morning: end time precedes start time"]);
}

#[test]
fn incomplete_segment_is_permissive() {
    let mut entry = DayEntry::empty(1);
    entry.morning_in = t("09:00");
    entry.afternoon_out = t("18:00");

    let result = validate_day(&entry);
    assert_eq!(result.total_minutes, 0);
    assert!(result.is_clean());
}

#[test]
fn absence_short_circuits_hours() {
    for absence in [Absence::Vacation, Absence::NonWorking, Absence::Medical] {
        let mut entry = DayEntry::empty(12);
        entry.absence = absence;
        // Even inconsistent leftovers are ignored by the short-circuit.
        entry.morning_in = t("10:00");
        entry.morning_out = t("09:00");

        let result = validate_day(&entry);
        assert_eq!(result.total_minutes, 0);
        assert!(result.is_clean());
    }
}

#[test]
fn month_validation_collects_every_day() {
    let mut bad1 = DayEntry::empty(2);
    bad1.morning_in = t("10:00");
    bad1.morning_out = t("09:00");

    let mut bad2 = DayEntry::empty(5);
    bad2.afternoon_in = t("17:00");
    bad2.afternoon_out = t("08:00");

    let good = DayEntry::empty(3);

    let result = validate_month(&[bad1, good, bad2]);
    assert!(!result.is_clean());
    assert_eq!(result.per_day.len(), 2);
    assert_eq!(
        result.messages,
        vec![
            "day 2: morning: end time precedes start time",
            "day 5: afternoon: end time precedes start time",
        ]
    );
}
