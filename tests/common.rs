#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsl() -> Command {
    cargo_bin_cmd!("rspendlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rspendlog.sqlite", name));
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

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables and seeds default categories)
    rsl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // three expenses across two users and two categories
    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-10-20",
            "Groceries",
            "30",
            "--category",
            "Food",
            "--user",
            "Alice",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-10-25",
            "Bus pass",
            "20",
            "--category",
            "Transportation",
            "--user",
            "Bob",
        ])
        .assert()
        .success();

    rsl()
        .args([
            "--db",
            db_path,
            "add",
            "2025-10-30",
            "Dinner out",
            "50",
            "--category",
            "Food",
            "--user",
            "Alice",
        ])
        .assert()
        .success();
}

/// Open a library-level pool over an initialized temp DB, for tests that
/// exercise the query layer directly.
pub fn open_initialized_pool(db_path: &str) -> rspendlog::db::pool::DbPool {
    let pool = rspendlog::db::pool::DbPool::new(db_path).expect("open db");
    rspendlog::db::initialize::init_db(&pool.conn).expect("init db");
    pool
}
