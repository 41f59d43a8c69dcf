//! Rust Banking Ledger CLI
//!
//! Replays a banking session script against the in-memory ledger and writes
//! the resulting statement (or category report) to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- session.csv > statement.csv
//! cargo run -- --now "2024-11-28 10:00" session.csv > statement.csv
//! cargo run -- --search uber --category Transporte session.csv
//! cargo run -- --report categories session.csv > categories.csv
//! cargo run -- --empty --balance 1000 --cashback 20 session.csv
//! ```
//!
//! Logs are written to stderr; `RUST_LOG` overrides `--log-level`.
//!
//! # Exit Codes
//!
//! - 0: Success (rejected actions are logged, not fatal)
//! - 1: Error (missing arguments, file not found, unreadable seed file, etc.)

use rust_banking_ledger::cli::{self, CliArgs, ReportType};
use rust_banking_ledger::core::{Clock, FixedClock, LedgerEngine};
use rust_banking_ledger::io::{write_category_report_csv, write_statement_csv};
use rust_banking_ledger::logging;
use rust_banking_ledger::replay::replay_file;
use rust_banking_ledger::LedgerError;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), LedgerError> {
    let config = args.to_session_config()?;

    match args.now {
        Some(now) => run_with(args, LedgerEngine::with_clock(config, FixedClock(now))?),
        None => run_with(args, LedgerEngine::new(config)?),
    }
}

fn run_with<C: Clock>(args: &CliArgs, mut engine: LedgerEngine<C>) -> Result<(), LedgerError> {
    replay_file(&args.input_file, &mut engine)?;

    // Output goes to stdout
    let mut output = std::io::stdout();
    match args.report {
        ReportType::Statement => {
            write_statement_csv(engine.filter(&args.search, &args.category), &mut output)
        }
        ReportType::Categories => write_category_report_csv(
            &engine.category_totals(&args.search, &args.category)?,
            &mut output,
        ),
    }
}
