//! Money and identifier utilities
//!
//! Monetary values are carried as [`Decimal`] so that balance arithmetic stays
//! exact. This module also owns the text forms of an amount (user input,
//! search matching, pt-BR display) and the id assignment policy.

use super::error::LedgerError;
use super::transaction::{Transaction, TransactionId};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Signed monetary value: positive is a credit, negative a debit
pub type Money = Decimal;

/// Parse a user-entered amount
///
/// Accepts `.` as the decimal separator, or `,` the way pt-BR keyboards enter
/// it (`"1.234,56"` and `"100,5"` are both understood). The sign is kept; the
/// debit policy decides whether a value is acceptable.
///
/// # Errors
///
/// Returns `InvalidAmount` for empty or non-numeric input.
pub fn parse_amount(input: &str) -> Result<Money, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::invalid_amount(input));
    }

    let normalized = match trimmed.matches(',').count() {
        0 => trimmed.to_string(),
        1 => trimmed.replace('.', "").replace(',', "."),
        _ => return Err(LedgerError::invalid_amount(input)),
    };

    Decimal::from_str(&normalized).map_err(|_| LedgerError::invalid_amount(input))
}

/// Decimal string used for substring search over amounts
///
/// Trailing fractional zeros are dropped, so `-234.50` searches as `-234.5`
/// and `5000.00` as `5000`.
pub fn search_form(amount: Money) -> String {
    amount.normalize().to_string()
}

/// Format an amount for display as Brazilian reais
///
/// Always two fraction digits, `.` as thousands separator and `,` as decimal
/// separator: `12543.87` becomes `R$ 12.543,87`, `-100` becomes `-R$ 100,00`.
pub fn format_brl(amount: Money) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.2}", rounded.abs());
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {grouped},{fraction}")
}

/// Next id for a new transaction: one past the largest live id, or 1
///
/// Ids are derived from the current sequence rather than a running counter,
/// so they stay dense when the seed set is edited. Removing the entry with the
/// largest id would let that id be issued again.
pub fn next_transaction_id(transactions: &[Transaction]) -> TransactionId {
    transactions
        .iter()
        .map(|tx| tx.id)
        .max()
        .map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn tx(id: TransactionId) -> Transaction {
        let at = NaiveDate::from_ymd_opt(2024, 11, 27)
            .unwrap()
            .and_hms_opt(14, 32, 0)
            .unwrap();
        Transaction::new(id, "Uber", Decimal::new(-3240, 2), at, Category::TRANSPORT)
    }

    #[rstest]
    #[case::plain("100", Decimal::new(100, 0))]
    #[case::dot_fraction("100.50", Decimal::new(10050, 2))]
    #[case::comma_fraction("100,5", Decimal::new(1005, 1))]
    #[case::grouped_ptbr("1.234,56", Decimal::new(123456, 2))]
    #[case::surrounding_whitespace("  42.1 ", Decimal::new(421, 1))]
    #[case::negative("-5", Decimal::new(-5, 0))]
    fn test_parse_amount_valid(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::letters("abc")]
    #[case::trailing_garbage("12abc")]
    #[case::two_commas("1,2,3")]
    #[case::not_a_number("NaN")]
    #[case::infinity("inf")]
    fn test_parse_amount_invalid(#[case] input: &str) {
        assert!(matches!(
            parse_amount(input),
            Err(LedgerError::InvalidAmount { .. })
        ));
    }

    #[rstest]
    #[case::drops_trailing_zero(Decimal::new(-23450, 2), "-234.5")]
    #[case::whole_number(Decimal::new(500000, 2), "5000")]
    #[case::keeps_fraction(Decimal::new(15678, 2), "156.78")]
    fn test_search_form(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(search_form(amount), expected);
    }

    #[rstest]
    #[case::grouped(Decimal::new(1254387, 2), "R$ 12.543,87")]
    #[case::small(Decimal::new(4990, 2), "R$ 49,90")]
    #[case::negative(Decimal::new(-100, 0), "-R$ 100,00")]
    #[case::millions(Decimal::new(123456789, 2), "R$ 1.234.567,89")]
    #[case::zero(Decimal::ZERO, "R$ 0,00")]
    #[case::rounds(Decimal::new(12345, 3), "R$ 12,35")]
    fn test_format_brl(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_brl(amount), expected);
    }

    #[test]
    fn test_next_id_empty_sequence_starts_at_one() {
        assert_eq!(next_transaction_id(&[]), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one_regardless_of_order() {
        let transactions = vec![tx(3), tx(8), tx(5)];
        assert_eq!(next_transaction_id(&transactions), 9);
    }
}
