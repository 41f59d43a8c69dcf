//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `money`: Monetary values, amount parsing and identifier assignment
//! - `category`: Open set of transaction category labels
//! - `transaction`: Ledger entries and identifiers
//! - `action`: Session actions issued by the surrounding screens
//! - `error`: Error types for the ledger engine

pub mod action;
pub mod category;
pub mod error;
pub mod money;
pub mod transaction;

pub use action::{DebitRequest, PixFavorite, SessionAction};
pub use category::Category;
pub use error::LedgerError;
pub use money::{format_brl, next_transaction_id, parse_amount, search_form, Money};
pub use transaction::{Transaction, TransactionId};
