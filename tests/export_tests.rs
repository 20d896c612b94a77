use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_worker, pz, setup_test_db, temp_out};

fn record_week(db_path: &str) {
    // Mon 2025-01-06 then copied through Fri the 10th.
    pz().args([
        "--db",
        db_path,
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

    pz().args(["--db", db_path, "copy", "1", "2025-01-06", "2025-01-10"])
        .assert()
        .success();
}

#[test]
fn test_export_csv_writes_report() {
    let db_path = setup_test_db("export_csv");
    init_db_with_worker(&db_path);
    record_week(&db_path);

    let out = temp_out("export_csv", "csv");
    pz().args([
        "--db", &db_path, "export", "1", "2025-01", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = std::fs::read_to_string(&out).unwrap();
    assert!(content.contains("day,date,weekday,morning,afternoon,absence,total,signed"));
    assert!(content.contains("2025-01-06"));
    assert!(content.contains("09:00-13:00"));
}

#[test]
fn test_export_json_writes_report() {
    let db_path = setup_test_db("export_json");
    init_db_with_worker(&db_path);
    record_week(&db_path);

    let out = temp_out("export_json", "json");
    pz().args([
        "--db", &db_path, "export", "1", "2025-01", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = std::fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed["worker"], "Mario Rossi");
    assert_eq!(parsed["year"], 2025);
    assert_eq!(parsed["month"], 1);
    assert_eq!(parsed["rows"].as_array().unwrap().len(), 31);
}

#[test]
fn test_export_pdf_writes_report() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_worker(&db_path);
    record_week(&db_path);

    let out = temp_out("export_pdf", "pdf");
    pz().args(["--db", &db_path, "export", "1", "2025-01", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_worker(&db_path);
    record_week(&db_path);

    let out = temp_out("export_overwrite", "csv");
    pz().args([
        "--db", &db_path, "export", "1", "2025-01", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    pz().args([
        "--db", &db_path, "export", "1", "2025-01", "--format", "csv", "--file", &out,
    ])
    .assert()
    .failure()
    .stderr(contains("already exists").and(contains("--force")));

    pz().args([
        "--db", &db_path, "export", "1", "2025-01", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();
}

#[test]
fn test_export_of_unsaved_month_is_blank_but_valid() {
    let db_path = setup_test_db("export_blank_month");
    init_db_with_worker(&db_path);

    let out = temp_out("export_blank_month", "csv");
    pz().args([
        "--db", &db_path, "export", "1", "2025-03", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = std::fs::read_to_string(&out).unwrap();
    // Header, 31 day rows, total row.
    assert_eq!(content.lines().count(), 33);
}
