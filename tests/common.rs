#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use presenza::db::pool::DbPool;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pz() -> Command {
    cargo_bin_cmd!("presenza")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_presenza.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Open an initialized in-memory database wrapped in a DbPool.
pub fn mem_pool() -> DbPool {
    let conn = rusqlite::Connection::open_in_memory().expect("open in-memory db");
    conn.execute_batch("PRAGMA foreign_keys = ON;").expect("pragma");
    presenza::db::init_db(&conn).expect("init db");
    DbPool { conn }
}

/// Initialize DB via CLI and register one worker (id 1)
pub fn init_db_with_worker(db_path: &str) {
    pz().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    pz().args(["--db", db_path, "worker", "add", "Mario Rossi"])
        .assert()
        .success();
}
