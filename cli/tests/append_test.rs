//! Integration tests for the `append` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn growlist() -> Command {
    Command::new(env!("CARGO_BIN_EXE_growlist"))
}

#[test]
fn append_reports_single_growth() {
    growlist()
        .args(["append", "10", "20", "30", "40", "50"])
        .assert()
        .success()
        .stdout("grow 4 -> 8\nlen=5 capacity=8 [10, 20, 30, 40, 50]\n");
}

#[test]
fn append_nothing() {
    growlist()
        .args(["append"])
        .assert()
        .success()
        .stdout("len=0 capacity=4 []\n");
}

#[test]
fn append_negative_values() {
    growlist()
        .args(["append", "-1", "-2"])
        .assert()
        .success()
        .stdout("len=2 capacity=4 [-1, -2]\n");
}

#[test]
fn append_with_capacity_and_factor() {
    growlist()
        .args(["append", "--capacity", "2", "--growth-factor", "1.1", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("grow 4 -> 5\nlen=5 capacity=5 [1, 2, 3, 4, 5]\n");
}

#[test]
fn append_with_rejected_factor_warns() {
    growlist()
        .args(["append", "--growth-factor", "-3", "1", "2", "3", "4", "5"])
        .assert()
        .success()
        .stdout("grow 4 -> 8\nlen=5 capacity=8 [1, 2, 3, 4, 5]\n")
        .stderr(predicate::str::contains("rejected growth factor"));
}

#[test]
fn append_rejects_non_integers() {
    growlist()
        .args(["append", "1", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'two'"));
}
