//! Debit validation shared by the transfer and top-up flows
//!
//! Every user-initiated debit is checked here before anything is appended:
//!
//! 1. Every required field of the request, and the amount text, is non-empty
//! 2. The amount parses as a number strictly greater than zero
//! 3. The amount does not exceed the current balance
//!
//! The first failing check decides the error, and the ledger is not touched.

use crate::types::{parse_amount, DebitRequest, LedgerError, Money};
use rust_decimal::Decimal;

/// Check a debit request against the current balance
///
/// # Arguments
///
/// * `request` - What is being paid
/// * `amount_text` - Amount as typed by the user
/// * `balance` - Current ledger balance
///
/// # Returns
///
/// * `Ok(Money)` - The positive amount to debit
/// * `Err(LedgerError)` - `MissingField`, `InvalidAmount` or `InsufficientFunds`
pub fn validate_debit(
    request: &DebitRequest,
    amount_text: &str,
    balance: Money,
) -> Result<Money, LedgerError> {
    if let Some((field, _)) = request
        .required_fields()
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        return Err(LedgerError::missing_field(field));
    }
    if amount_text.trim().is_empty() {
        return Err(LedgerError::missing_field("amount"));
    }

    let amount = parse_amount(amount_text)?;
    if amount <= Decimal::ZERO {
        return Err(LedgerError::invalid_amount(amount_text));
    }

    if amount > balance {
        return Err(LedgerError::insufficient_funds(balance, amount));
    }

    Ok(amount)
}
