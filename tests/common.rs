#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rta() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB and place a few names on the board
pub fn init_board_with_names(db_path: &str, names: &str) {
    rta()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rta()
        .args(["--db", db_path, "--quiet", "names", names])
        .assert()
        .success();
}
