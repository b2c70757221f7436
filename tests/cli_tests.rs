use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_board_with_names, rta, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rta()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_names_and_show() {
    let db_path = setup_test_db("cli_names_show");
    init_board_with_names(&db_path, "철수, 영희, 동근이름다섯글자");

    rta()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("철수"))
        .stdout(contains("영희"))
        .stdout(contains("동근이름다섯글자").not())
        .stdout(contains("0/2"));
}

#[test]
fn test_names_print_returns_editable_list() {
    let db_path = setup_test_db("cli_names_print");
    init_board_with_names(&db_path, " 가,나 ,  다");

    rta()
        .args(["--db", &db_path, "names", "--print"])
        .assert()
        .success()
        .stdout(contains("가, 나, 다"));
}

#[test]
fn test_names_clear_empties_board() {
    let db_path = setup_test_db("cli_names_clear");
    init_board_with_names(&db_path, "가, 나");

    rta()
        .args(["--db", &db_path, "--quiet", "names", "--clear"])
        .assert()
        .success()
        .stdout(contains("Board cleared"));

    rta()
        .args(["--db", &db_path, "names", "--print"])
        .assert()
        .success()
        .stdout(contains("No names on the board"));
}

#[test]
fn test_tap_cycles_and_updates_dashboard() {
    let db_path = setup_test_db("cli_tap");
    init_board_with_names(&db_path, "가, 나, 다, 라, 마");

    rta()
        .args(["--db", &db_path, "tap", "1", "4"])
        .assert()
        .success()
        .stdout(contains("가: none → "))
        .stdout(contains("2/5"));

    rta()
        .args(["--db", &db_path, "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"present\": 2"))
        .stdout(contains("\"total\": 5"));
}

#[test]
fn test_tap_empty_seat_is_noop() {
    let db_path = setup_test_db("cli_tap_empty");
    init_board_with_names(&db_path, "가");

    rta()
        .args(["--db", &db_path, "--quiet", "tap", "7"])
        .assert()
        .success()
        .stdout(contains("Seat #7 is empty"))
        .stdout(contains("0/1"));
}

#[test]
fn test_tap_rejects_out_of_range_seat() {
    let db_path = setup_test_db("cli_tap_range");
    init_board_with_names(&db_path, "가");

    for bad in ["0", "31"] {
        rta()
            .args(["--db", &db_path, "--quiet", "tap", bad])
            .assert()
            .failure()
            .stderr(contains("Invalid seat number"));
    }

    // nothing was applied
    rta()
        .args(["--db", &db_path, "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"present\": 0"));
}

#[test]
fn test_sort_and_reset() {
    let db_path = setup_test_db("cli_sort_reset");
    init_board_with_names(&db_path, "다, 가, 나");

    rta()
        .args(["--db", &db_path, "--quiet", "tap", "1"])
        .assert()
        .success();

    rta()
        .args(["--db", &db_path, "sort"])
        .assert()
        .success()
        .stdout(contains("sorted"));

    rta()
        .args(["--db", &db_path, "names", "--print"])
        .assert()
        .success()
        .stdout(contains("가, 나, 다"));

    // 다 moved to seat 3 and kept its status
    rta()
        .args(["--db", &db_path, "show", "--json"])
        .assert()
        .success()
        .stdout(contains("\"present\": 1"));

    rta()
        .args(["--db", &db_path, "reset"])
        .assert()
        .success()
        .stdout(contains("All statuses reset"))
        .stdout(contains("0/3"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_board_with_names(&db_path, "가, 나");

    rta()
        .args(["--db", &db_path, "--quiet", "tap", "2"])
        .assert()
        .success();

    rta()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Database initialized"))
        .stdout(contains("나: none → present"));
}

#[test]
fn test_unreadable_database_falls_back_to_memory_board() {
    let db_path = setup_test_db("cli_garbage");
    let garbage: Vec<u8> = (0..4096u32).map(|i| (i * 7 + 13) as u8).collect();
    fs::write(&db_path, garbage).unwrap();

    rta()
        .args(["--db", &db_path, "--quiet", "show"])
        .assert()
        .success()
        .stderr(contains("in-memory"))
        .stdout(contains("0/0"));

    rta()
        .args(["--db", &db_path, "--quiet", "names", "가, 나"])
        .assert()
        .success()
        .stdout(contains("가"))
        .stdout(contains("2 name(s)"));

    rta()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stderr(contains("no log to show"));
}
