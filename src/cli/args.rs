use crate::config::SessionConfig;
use crate::io::read_statement_csv;
use crate::types::{parse_amount, Category, LedgerError, Money};
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Replay a banking session against an in-memory ledger
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(about = "Replay a banking session against an in-memory ledger", long_about = None)]
pub struct CliArgs {
    /// Session script (CSV) with the actions to apply
    #[arg(value_name = "INPUT", help = "Path to the session script CSV file")]
    pub input_file: PathBuf,

    /// Seed balance (defaults to the demo account's)
    #[arg(long = "balance", value_name = "AMOUNT", value_parser = parse_money)]
    pub balance: Option<Money>,

    /// Seed cashback reservoir (defaults to the demo account's)
    #[arg(long = "cashback", value_name = "AMOUNT", value_parser = parse_money)]
    pub cashback: Option<Money>,

    /// Seed history in statement format, replacing the demo history
    #[arg(long = "seed-file", value_name = "FILE", conflicts_with = "empty")]
    pub seed_file: Option<PathBuf>,

    /// Start from an empty account (zero balance, no cashback, no history)
    #[arg(long = "empty")]
    pub empty: bool,

    /// Freeze the clock at this moment, e.g. "2024-11-28 10:00"
    #[arg(long = "now", value_name = "DATETIME", value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,

    /// Statement search term
    #[arg(long = "search", value_name = "TERM", default_value = "")]
    pub search: String,

    /// Statement category filter
    #[arg(long = "category", value_name = "CATEGORY", default_value = Category::ALL)]
    pub category: String,

    /// What to write to stdout
    #[arg(long = "report", value_name = "REPORT", default_value = "statement")]
    pub report: ReportType,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Output produced after the replay
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    /// Filtered transaction list
    Statement,
    /// Debit totals per category with their share
    Categories,
}

fn parse_money(value: &str) -> Result<Money, String> {
    parse_amount(value).map_err(|e| e.to_string())
}

fn parse_now(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value.trim(), format).ok())
        .ok_or_else(|| format!("invalid date/time '{}', expected YYYY-MM-DD HH:MM", value))
}

impl CliArgs {
    /// Build the session configuration from the CLI arguments
    ///
    /// Starts from the demo account (or an empty one with `--empty`), then
    /// applies `--balance`, `--cashback` and `--seed-file` on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed file cannot be opened or parsed.
    pub fn to_session_config(&self) -> Result<SessionConfig, LedgerError> {
        let mut config = if self.empty {
            SessionConfig::empty()
        } else {
            SessionConfig::default()
        };

        if let Some(path) = &self.seed_file {
            let file = File::open(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound => LedgerError::FileNotFound {
                    path: path.display().to_string(),
                },
                _ => LedgerError::from(e),
            })?;
            config.transactions = read_statement_csv(file)?;
        }
        if let Some(balance) = self.balance {
            config.seed_balance = balance;
        }
        if let Some(cashback) = self.cashback {
            config.cashback = cashback;
        }

        tracing::debug!(
            seed_transactions = config.transactions.len(),
            seed_file = self.seed_file.is_some(),
            "session configured"
        );
        Ok(config)
    }
}
