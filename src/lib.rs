//! Rust Banking Ledger Library
//! # Overview
//!
//! This library provides the in-memory ledger behind a demo banking client:
//! an ordered transaction history with a running balance, category edits,
//! statement search, spending per category and a cashback reservoir.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, Category, SessionAction, etc.)
//! - [`config`] - Session seed data (demo account by default)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Session aggregate routing every mutation
//!   - [`core::transaction_store`] - History and balance kept in lock-step
//!   - [`core::query`] / [`core::aggregation`] - Statement views and chart data
//!   - [`core::cashback`] - Single-use cashback redemption
//! - [`io`] - Session script reader, statement and report writers
//! - [`replay`] - Applies a session script to an engine
//!
//! # Session Actions
//!
//! - **PIX**: Transfer to a key, recorded as a `PIX` debit
//! - **Mobile top-up**: Phone credit, recorded as a `Recarga` debit
//! - **Service top-up**: Prepaid service credit, recorded as a `Recarga` debit
//! - **Redeem cashback**: Moves the whole reservoir into the balance
//! - **Reclassify**: Changes a transaction's category; amounts never change
//!
//! # Balance
//!
//! After every operation the balance equals the opening balance plus the sum
//! of all amounts in the history.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod replay;
pub mod types;

pub use config::SessionConfig;
pub use core::{LedgerEngine, TransactionStore};
pub use io::{write_category_report_csv, write_statement_csv};
pub use types::{
    Category, DebitRequest, LedgerError, Money, PixFavorite, SessionAction, Transaction,
    TransactionId,
};
