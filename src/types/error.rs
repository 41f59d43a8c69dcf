//! Error types for the ledger engine
//!
//! This module defines all error types that can occur while operating on the
//! ledger or replaying a session from CSV.
//!
//! # Error Categories
//!
//! - **Validation Errors**: Missing required fields, unparsable or non-positive amounts
//! - **Balance Errors**: Insufficient funds, empty cashback reservoir
//! - **Integrity Errors**: Duplicate ids, balance mismatch, arithmetic overflow
//! - **File / CSV Errors**: File not found, I/O failures, malformed records
//!
//! Every error leaves the ledger unchanged. None of them is fatal to a session.

use super::transaction::TransactionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// A required field of a debit request was left empty
    #[error("Missing required field '{field}'")]
    MissingField {
        /// Name of the empty field
        field: String,
    },

    /// Amount text is not a number, or is zero or negative
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The amount as entered
        amount: String,
    },

    /// Debit larger than the current balance
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Balance at the time of the request
        balance: Decimal,
        /// Requested debit amount
        requested: Decimal,
    },

    /// Cashback redemption attempted with nothing to redeem
    #[error("Cashback reservoir is empty")]
    EmptyReservoir,

    /// Balance arithmetic would overflow
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// Two transactions share an id
    #[error("Duplicate transaction ID {id}")]
    DuplicateTransaction {
        /// The repeated id
        id: TransactionId,
    },

    /// A replacement sequence would change the sum of amounts
    #[error("Replacement changes the amount total: expected {expected}, got {actual}")]
    BalanceMismatch {
        /// Sum of amounts before the replacement
        expected: Decimal,
        /// Sum of amounts in the replacement
        actual: Decimal,
    },

    /// A replacement sequence reorders, adds or drops transactions
    #[error("Replacement does not keep the transaction order")]
    OrderChanged,

    /// Unknown or incomplete action in a session script
    #[error("Invalid action '{action}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidAction {
        /// The action as written
        action: String,
        /// Line number where the action was read (if available)
        line: Option<u64>,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        LedgerError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        LedgerError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds { balance, requested }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }

    /// Create an InvalidAction error
    pub fn invalid_action(action: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidAction {
            action: action.to_string(),
            line,
        }
    }

    /// Message shown to the user by the banking screens (pt-BR)
    pub fn user_message(&self) -> String {
        match self {
            LedgerError::MissingField { .. } => "Preencha todos os campos".to_string(),
            LedgerError::InvalidAmount { .. } => "Valor inválido".to_string(),
            LedgerError::InsufficientFunds { .. } => "Saldo insuficiente".to_string(),
            LedgerError::EmptyReservoir => {
                "Você não tem cashback disponível para resgatar".to_string()
            }
            other => format!("Não foi possível concluir a operação: {other}"),
        }
    }
}
