use std::io::Write;

use assert_cmd::Command;
use predicates as pred;
use predicates::prelude::*;
use tempfile::NamedTempFile;

#[test]
fn demonstration_runs_without_arguments() {
    let exe = env!("CARGO_BIN_EXE_bank_account");
    let mut cmd = Command::new(exe);

    cmd.assert()
        .success()
        .stdout(pred::str::contains("1. open 1000\nAccount balance: 1,000.00 ₽"))
        .stdout(pred::str::contains(
            "Error: insufficient funds: tried to withdraw 2000, only 1200 available",
        ))
        .stdout(pred::str::contains(
            "Error: invalid amount -500: initial balance cannot be negative",
        ))
        .stdout(pred::str::contains(
            "=== Final result ===\nAccount balance: 1,500.00 ₽",
        ));
}

#[test]
fn csv_script_drives_the_account() {
    // open 1000.50, +499.50 = 1500, -1500 = 0, then a bad row and a rejected withdrawal
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(
        file,
        "op, amount\n\
    open, 1000.50\n\
    deposit, 499.50\n\
    withdraw, 1500\n\
    refund, 3\n\
    withdraw, 0.01\n\
    balance,"
    )
    .unwrap();

    let exe = env!("CARGO_BIN_EXE_bank_account");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stdout(pred::str::contains("2. deposit 499.50\nAccount balance: 1,500.00 ₽"))
        .stdout(pred::str::contains(
            "4. withdraw 0.01\nError: insufficient funds: tried to withdraw 0.01, only 0.00 available",
        ))
        .stdout(pred::str::contains("5. balance\nAccount balance: 0.00 ₽"))
        .stderr(pred::str::contains("Invalid operation type: refund"));
}

#[test]
fn script_without_header_fails_up_front() {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "deposit, 10\nwithdraw, 5").unwrap();

    let exe = env!("CARGO_BIN_EXE_bank_account");
    let mut cmd = Command::new(exe);
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .stderr(pred::str::contains("missing the `op` column"))
        .stderr(pred::str::contains("DLQ Report").not());
}

#[test]
fn missing_script_file_fails() {
    let exe = env!("CARGO_BIN_EXE_bank_account");
    let mut cmd = Command::new(exe);
    cmd.arg("does/not/exist.csv");

    cmd.assert().failure();
}
