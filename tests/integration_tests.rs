use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_worker, pz, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    pz().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized at"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_worker_add_and_list() {
    let db_path = setup_test_db("worker_add_list");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "worker",
        "add",
        "Anna Bianchi",
        "--vacation-days",
        "30",
    ])
    .assert()
    .success()
    .stdout(contains("Worker 'Anna Bianchi' added with id 2."));

    pz().args(["--db", &db_path, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Mario Rossi").and(contains("Anna Bianchi")).and(contains("30")));
}

#[test]
fn test_worker_del_cascades() {
    let db_path = setup_test_db("worker_del");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "worker", "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Worker 'Mario Rossi' deleted."));

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .failure()
        .stderr(contains("Worker 1 not found"));
}

#[test]
fn test_set_records_a_full_day() {
    let db_path = setup_test_db("set_full_day");
    init_db_with_worker(&db_path);

    // 2025-01-06 is a Monday.
    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
        "--afternoon-in",
        "14:00",
        "--afternoon-out",
        "18:00",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded").and(contains("Mario Rossi")));

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("09:00-13:00").and(contains("14:00-18:00")));
}

#[test]
fn test_set_refuses_weekend() {
    let db_path = setup_test_db("set_weekend");
    init_db_with_worker(&db_path);

    // 2025-01-04 is a Saturday.
    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-04",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
    ])
    .assert()
    .failure()
    .stderr(contains("weekend"));
}

#[test]
fn test_set_refuses_over_eight_hours() {
    let db_path = setup_test_db("set_over8h");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
        "--afternoon-in",
        "14:00",
        "--afternoon-out",
        "18:30",
    ])
    .assert()
    .failure()
    .stderr(contains("day 6: more than 8 hours recorded (8h 30m)"));

    // The refused month was never saved.
    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("09:00").not());
}

#[test]
fn test_absence_weekend_is_refused() {
    let db_path = setup_test_db("absence_weekend");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "absence", "1", "2025-01-04", "vacation"])
        .assert()
        .failure()
        .stderr(contains("weekend"));
}

#[test]
fn test_absence_replaces_hours_and_blocks_set() {
    let db_path = setup_test_db("absence_replaces");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
    ])
    .assert()
    .success();

    pz().args([
        "--db",
        &db_path,
        "absence",
        "1",
        "2025-01-06",
        "medical",
        "--justification",
        "certificate.pdf",
    ])
    .assert()
    .success()
    .stdout(contains("Marked 2025-01-06 as Medical leave for Mario Rossi."));

    // Hours cannot land on an absence day until it is cleared.
    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "08:00",
        "--morning-out",
        "12:00",
    ])
    .assert()
    .failure()
    .stderr(contains("clear the absence first"));

    pz().args(["--db", &db_path, "absence", "1", "2025-01-06", "none"])
        .assert()
        .success()
        .stdout(contains("Cleared 2025-01-06 for Mario Rossi."));

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "08:00",
        "--morning-out",
        "12:00",
    ])
    .assert()
    .success();
}

#[test]
fn test_copy_propagates_hours_over_weekdays() {
    let db_path = setup_test_db("copy_hours");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
        "--afternoon-in",
        "14:00",
        "--afternoon-out",
        "18:00",
    ])
    .assert()
    .success();

    // Mon the 6th through Fri the 10th: four weekday targets.
    pz().args(["--db", &db_path, "copy", "1", "2025-01-06", "2025-01-10"])
        .assert()
        .success()
        .stdout(contains("Copied day 6 to 4 day(s)."));

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("8:00"));
}

#[test]
fn test_copy_with_blank_source_fails() {
    let db_path = setup_test_db("copy_blank");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "copy", "1", "2025-01-06", "2025-01-10"])
        .assert()
        .failure()
        .stderr(contains("no valid content to copy"));
}

#[test]
fn test_copy_across_months_fails() {
    let db_path = setup_test_db("copy_cross_month");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "copy", "1", "2025-01-31", "2025-02-03"])
        .assert()
        .failure()
        .stderr(contains("same month"));
}

#[test]
fn test_vacation_request_and_balance() {
    let db_path = setup_test_db("vacation_balance");
    init_db_with_worker(&db_path);

    // One business week: 2025-06-02 .. 06.
    pz().args([
        "--db",
        &db_path,
        "vacation",
        "range",
        "1",
        "2025-06-02",
        "2025-06-06",
    ])
    .assert()
    .success()
    .stdout(contains("Created 5 request(s), 18 day(s) left."));

    pz().args(["--db", &db_path, "vacation", "balance", "1"])
        .assert()
        .success()
        .stdout(
            contains("allowance 23")
                .and(contains("23 left (approved only)"))
                .and(contains("18 left counting pending")),
        );

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Vacation (pending)"));
}

#[test]
fn test_vacation_approve_reject_lifecycle() {
    let db_path = setup_test_db("vacation_lifecycle");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "vacation", "request", "1", "2025-06-02"])
        .assert()
        .success();
    pz().args(["--db", &db_path, "vacation", "request", "1", "2025-06-03"])
        .assert()
        .success();

    pz().args(["--db", &db_path, "vacation", "approve", "1"])
        .assert()
        .success()
        .stdout(contains("Request #1 approved (2025-06-02)."));

    pz().args(["--db", &db_path, "vacation", "reject", "2"])
        .assert()
        .success()
        .stdout(contains("Request #2 rejected (2025-06-03)."));

    // Approved requests are settled; a second transition is refused.
    pz().args(["--db", &db_path, "vacation", "reject", "1"])
        .assert()
        .failure()
        .stderr(contains("already approved"));

    pz().args(["--db", &db_path, "vacation", "list", "1"])
        .assert()
        .success()
        .stdout(contains("approved").and(contains("rejected")));

    pz().args(["--db", &db_path, "vacation", "del", "1"])
        .assert()
        .success()
        .stdout(contains("Request #1 deleted"));
}

#[test]
fn test_vacation_duplicate_is_refused() {
    let db_path = setup_test_db("vacation_duplicate");
    init_db_with_worker(&db_path);

    pz().args(["--db", &db_path, "vacation", "request", "1", "2025-06-02"])
        .assert()
        .success();

    pz().args(["--db", &db_path, "vacation", "request", "1", "2025-06-02"])
        .assert()
        .failure()
        .stderr(contains("2025-06-02"));
}

#[test]
fn test_show_renders_summary_line() {
    let db_path = setup_test_db("show_summary");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
    ])
    .assert()
    .success();

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(
            contains("Mario Rossi 2025-01")
                .and(contains("Total: 4:00"))
                .and(contains("Days with hours: 1"))
                .and(contains("Signed: no")),
        );
}

#[test]
fn test_sign_attaches_signature() {
    let db_path = setup_test_db("sign");
    init_db_with_worker(&db_path);

    let sig = common::temp_out("sign_image", "png");
    std::fs::write(&sig, [0x89u8, 0x50, 0x4e, 0x47]).unwrap();

    pz().args(["--db", &db_path, "sign", "1", "2025-01", "--file", &sig])
        .assert()
        .success()
        .stdout(contains("Signature attached to 2025-01 for Mario Rossi."));

    pz().args(["--db", &db_path, "show", "1", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("Signed: yes"));
}

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup");
    init_db_with_worker(&db_path);

    let dest = common::temp_out("backup_copy", "sqlite");
    pz().args(["--db", &db_path, "backup", "--file", &dest, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created:"));

    assert!(std::path::Path::new(&dest).exists());
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_worker(&db_path);

    pz().args([
        "--db",
        &db_path,
        "set",
        "1",
        "2025-01-06",
        "--morning-in",
        "09:00",
        "--morning-out",
        "13:00",
    ])
    .assert()
    .success();

    pz().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("worker_add")).and(contains("set")));

    pz().args(["--db", &db_path, "log", "--print", "--filter", "worker"])
        .assert()
        .success()
        .stdout(contains("worker_add"));
}
