//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Clock abstraction used to stamp transactions
//! - `transaction_store` - Ordered history and running balance
//! - `classification` - Category edits
//! - `query` - Statement search and category filter
//! - `aggregation` - Spending per category for the statement chart
//! - `cashback` - Cashback reservoir and redemption
//! - `debit` - Validation shared by transfers and top-ups
//! - `engine` - Session aggregate routing every mutation

pub mod aggregation;
pub mod cashback;
pub mod classification;
pub mod debit;
pub mod engine;
pub mod query;
pub mod traits;
pub mod transaction_store;

pub use aggregation::{
    category_totals, expense_total, income_total, percentage_of, CategoryShare, CategoryTotals,
};
pub use cashback::{CashbackReservoir, ReservoirState};
pub use classification::reclassify;
pub use debit::validate_debit;
pub use engine::{ActionOutcome, LedgerEngine};
pub use query::filter;
pub use traits::{Clock, FixedClock, SystemClock};
pub use transaction_store::TransactionStore;
