use crate::domain::account::Account;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

/// Output encoding for account snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// Writes account snapshots to any `Write` sink.
pub struct AccountWriter<W: Write> {
    sink: W,
    format: OutputFormat,
}

impl<W: Write> AccountWriter<W> {
    pub fn new(sink: W, format: OutputFormat) -> Self {
        Self { sink, format }
    }

    pub fn write_accounts(&mut self, accounts: impl IntoIterator<Item = Account>) -> Result<()> {
        match self.format {
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.sink);
                for account in accounts {
                    writer.serialize(account)?;
                }
                writer.flush()?;
            }
            OutputFormat::Json => {
                for account in accounts {
                    serde_json::to_writer(&mut self.sink, &account)?;
                    writeln!(self.sink)?;
                }
                self.sink.flush()?;
            }
        }
        Ok(())
    }
}
