use clap::Parser;
use ledger_core::application::ledger::Ledger;
use ledger_core::domain::transfer::TransferRequest;
use ledger_core::interfaces::batch::{run_transfers, seed_accounts};
use ledger_core::interfaces::csv::account_writer::{AccountWriter, OutputFormat};
use ledger_core::interfaces::csv::record_reader::RecordReader;
use ledger_core::interfaces::status::TransferStatus;
use ledger_core::logging::init_logging;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Accounts CSV file (id, first_name, last_name, balance)
    accounts: PathBuf,

    /// Transfers CSV file (source_id, target_id, amount)
    transfers: PathBuf,

    /// Number of threads applying transfers concurrently
    #[arg(long, default_value = "1")]
    workers: NonZeroUsize,

    /// Output format for the final balances
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let ledger = Ledger::default();

    let file = File::open(&cli.accounts).into_diagnostic()?;
    let accounts = RecordReader::new(file)
        .accounts()
        .filter_map(|result| match result {
            Ok(account) => Some(account),
            Err(e) => {
                warn!(error = %e, "Error reading account");
                None
            }
        });
    let created = seed_accounts(&ledger, accounts);

    let file = File::open(&cli.transfers).into_diagnostic()?;
    let transfers: Vec<TransferRequest> = RecordReader::new(file)
        .transfers()
        .filter_map(|result| match result {
            Ok(request) => Some(request),
            Err(e) => {
                warn!(error = %e, "Error reading transfer");
                None
            }
        })
        .collect();

    let summary = run_transfers(&ledger, &transfers, cli.workers);
    info!(
        accounts = created,
        transfers = summary.total(),
        applied = summary.count(TransferStatus::Ok),
        "batch finished"
    );

    let stdout = io::stdout();
    let mut writer = AccountWriter::new(stdout.lock(), cli.format);
    writer.write_accounts(ledger.accounts()).into_diagnostic()?;

    Ok(())
}
