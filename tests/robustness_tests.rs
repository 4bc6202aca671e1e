use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_account_rows_are_skipped() {
    let accounts = common::accounts_csv(&[
        "1, Pesho, P, 10.0",
        "abc, Gosho, G, 5.0",     // non-integer id
        "2, Misho, M, not_a_number", // bad balance
        "3, Joro, J, 2.0",
    ]);
    let transfers = common::transfers_csv(&[]);

    let mut cmd = Command::new(cargo_bin!("ledger-core"));
    cmd.arg(accounts.path()).arg(transfers.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading account"))
        .stdout(predicate::str::contains("1,Pesho,P,10.0"))
        .stdout(predicate::str::contains("3,Joro,J,2.0"))
        .stdout(predicate::str::contains("Misho").not());
}

#[test]
fn test_invalid_accounts_are_rejected() {
    let accounts = common::accounts_csv(&[
        "1, Pesho, P, 10",
        "1, Gosho, G, 99", // duplicate id
        "2, , M, 5",       // empty first name
        "3, Joro, J, -15", // negative balance
        "4, Tosho, T, ",   // missing balance
    ]);
    let transfers = common::transfers_csv(&[]);

    let mut cmd = Command::new(cargo_bin!("ledger-core"));
    cmd.arg(accounts.path()).arg(transfers.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Account with id 1 already exists"))
        .stderr(predicate::str::contains("account creation rejected"))
        .stderr(predicate::str::contains(
            "Invalid account: first and last names must not be empty",
        ))
        .stderr(predicate::str::contains(
            "Invalid account: balance must be present and not negative",
        ))
        .stdout(predicate::str::contains("1,Pesho,P,10"))
        .stdout(predicate::str::contains("Gosho").not())
        .stdout(predicate::str::contains("Joro").not())
        .stdout(predicate::str::contains("Tosho").not());
}

#[test]
fn test_malformed_transfer_rows_are_skipped() {
    let accounts = common::accounts_csv(&["1, Pesho, P, 10", "2, Gosho, G, 0"]);
    let transfers = common::transfers_csv(&[
        "1, 2, 1.0",
        "x, 2, 1.0",
        "1, 2, lots",
        "1, 2, 2.0",
    ]);

    let mut cmd = Command::new(cargo_bin!("ledger-core"));
    cmd.arg(accounts.path()).arg(transfers.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading transfer"))
        .stdout(predicate::str::contains("1,Pesho,P,7.0"))
        .stdout(predicate::str::contains("2,Gosho,G,3.0"));
}
