use ledger_core::application::ledger::Ledger;
use ledger_core::domain::account::{Account, AccountKey, NewAccount};
use rust_decimal::Decimal;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn open_account(ledger: &Ledger, id: i64, balance: Decimal) -> Account {
    ledger
        .create_account(NewAccount::new(
            AccountKey::new(id),
            format!("Pesho{}", id),
            format!("P{}", id),
            balance,
        ))
        .expect("Failed to create account")
}

pub fn write_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{}", header)?;
    for row in rows {
        writeln!(file, "{}", row)?;
    }
    file.flush()?;
    Ok(file)
}

pub fn accounts_csv(rows: &[&str]) -> NamedTempFile {
    write_csv("id, first_name, last_name, balance", rows).expect("Failed to write accounts")
}

pub fn transfers_csv(rows: &[&str]) -> NamedTempFile {
    write_csv("source_id, target_id, amount", rows).expect("Failed to write transfers")
}
