//! Spending aggregation for the statement chart
//!
//! Display-only computations over any transaction set (usually a filtered
//! view). Nothing here mutates the ledger. Sums are checked: a history whose
//! signed total fits can still have debits or credits that overflow when
//! added up on their own.

use crate::types::{Category, LedgerError, Money, Transaction};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Debit totals per category, in order of first occurrence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Money)>,
    grand_total: Money,
}

/// One chart slice
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// `None` when there is nothing to chart
    pub percentage: Option<f64>,
}

impl CategoryTotals {
    /// Total for a category, if any debit was recorded under it
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(label, _)| label == category)
            .map(|(_, total)| *total)
    }

    /// Sum over all categories
    pub fn grand_total(&self) -> Money {
        self.grand_total
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, Money)> {
        self.entries.iter().map(|(category, total)| (category, *total))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Each category with its share of the grand total
    pub fn shares(&self) -> Vec<CategoryShare> {
        self.entries
            .iter()
            .map(|(category, total)| CategoryShare {
                category: category.clone(),
                total: *total,
                percentage: percentage_of(*total, self.grand_total),
            })
            .collect()
    }
}

/// Absolute debit amounts accumulated per category
///
/// Credits and zero amounts are ignored. Categories appear in the order their
/// first debit is seen.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if a category total or the grand total
/// overflows.
pub fn category_totals<'a, I>(transactions: I) -> Result<CategoryTotals, LedgerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut entries: Vec<(Category, Money)> = Vec::new();
    let mut grand_total = Decimal::ZERO;

    for tx in transactions.into_iter().filter(|tx| tx.is_debit()) {
        let amount = tx.amount.abs();
        grand_total = checked_total(grand_total, amount)?;
        match entries.iter_mut().find(|(category, _)| *category == tx.category) {
            Some((_, total)) => *total = checked_total(*total, amount)?,
            None => entries.push((tx.category.clone(), amount)),
        }
    }

    Ok(CategoryTotals {
        entries,
        grand_total,
    })
}

/// `total` as a percentage of `grand_total`
///
/// Returns `None` when `grand_total` is zero: an empty or credit-only set has
/// no chart.
pub fn percentage_of(total: Money, grand_total: Money) -> Option<f64> {
    if grand_total.is_zero() {
        return None;
    }
    total
        .checked_div(grand_total)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|percentage| percentage.to_f64())
}

/// Sum of credits
pub fn income_total<'a, I>(transactions: I) -> Result<Money, LedgerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|tx| tx.is_credit())
        .try_fold(Decimal::ZERO, |total, tx| checked_total(total, tx.amount))
}

/// Sum of debits, kept negative
pub fn expense_total<'a, I>(transactions: I) -> Result<Money, LedgerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|tx| tx.is_debit())
        .try_fold(Decimal::ZERO, |total, tx| checked_total(total, tx.amount))
}

fn checked_total(total: Money, amount: Money) -> Result<Money, LedgerError> {
    total
        .checked_add(amount)
        .ok_or_else(|| LedgerError::arithmetic_overflow("aggregation"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::demo_transactions;
    use crate::core::TransactionStore;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn tx(id: u64, amount: Decimal, category: &str) -> Transaction {
        let at = NaiveDate::from_ymd_opt(2024, 11, 28)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        Transaction::new(id, "x", amount, at, category)
    }

    #[test]
    fn test_totals_count_debits_only() {
        let transactions = vec![
            tx(1, Decimal::new(-10, 0), "A"),
            tx(2, Decimal::new(500, 0), "A"),
            tx(3, Decimal::new(-30, 0), "B"),
        ];

        let totals = category_totals(&transactions).unwrap();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("A"), Some(Decimal::new(10, 0)));
        assert_eq!(totals.get("B"), Some(Decimal::new(30, 0)));
        assert_eq!(totals.grand_total(), Decimal::new(40, 0));
        assert_eq!(percentage_of(Decimal::new(10, 0), Decimal::new(40, 0)), Some(25.0));
    }

    #[test]
    fn test_totals_keep_first_occurrence_order() {
        let totals = category_totals(&demo_transactions()).unwrap();

        let order: Vec<&str> = totals.iter().map(|(category, _)| category.as_str()).collect();
        assert_eq!(
            order,
            vec!["Alimentação", "Entretenimento", "Transporte", "Saúde"]
        );
        // 234.50 + 89.00
        assert_eq!(totals.get("Alimentação"), Some(Decimal::new(32350, 2)));
    }

    #[test]
    fn test_credit_only_set_has_no_chart() {
        let transactions = vec![tx(1, Decimal::new(500, 0), "Salário")];

        let totals = category_totals(&transactions).unwrap();

        assert!(totals.is_empty());
        assert_eq!(totals.grand_total(), Decimal::ZERO);
        assert!(totals.shares().is_empty());
    }

    #[rstest]
    #[case::quarter(Decimal::new(10, 0), Decimal::new(40, 0), Some(25.0))]
    #[case::whole(Decimal::new(40, 0), Decimal::new(40, 0), Some(100.0))]
    #[case::zero_grand_total(Decimal::ZERO, Decimal::ZERO, None)]
    fn test_percentage_of(
        #[case] total: Decimal,
        #[case] grand_total: Decimal,
        #[case] expected: Option<f64>,
    ) {
        assert_eq!(percentage_of(total, grand_total), expected);
    }

    #[test]
    fn test_shares_sum_to_one_hundred() {
        let totals = category_totals(&demo_transactions()).unwrap();

        let sum: f64 = totals.shares().iter().filter_map(|share| share.percentage).sum();

        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_income_and_expense_totals() {
        let transactions = demo_transactions();

        // 500 + 5000 + 15.50
        assert_eq!(income_total(&transactions).unwrap(), Decimal::new(551550, 2));
        // -(234.50 + 49.90 + 32.40 + 89.00 + 67.80)
        assert_eq!(expense_total(&transactions).unwrap(), Decimal::new(-47360, 2));
    }

    fn forty_octillion() -> Decimal {
        Decimal::from_i128_with_scale(40_000_000_000_000_000_000_000_000_000, 0)
    }

    #[test]
    fn test_debits_overflowing_together_are_reported() {
        // Signed sum fits, so the store accepts the seed.
        let seed = vec![
            tx(1, Decimal::MAX, "X"),
            tx(2, -forty_octillion(), "A"),
            tx(3, -forty_octillion(), "A"),
        ];
        let store = TransactionStore::with_seed(Decimal::ZERO, seed).unwrap();
        assert!(store.is_consistent());

        let result = category_totals(store.transactions());

        assert!(matches!(
            result,
            Err(LedgerError::ArithmeticOverflow { .. })
        ));
        assert!(expense_total(store.transactions()).is_err());
    }

    #[test]
    fn test_grand_total_overflow_across_categories_is_reported() {
        let transactions = vec![
            tx(1, Decimal::MAX, "X"),
            tx(2, -forty_octillion(), "A"),
            tx(3, -forty_octillion(), "B"),
        ];

        assert!(category_totals(&transactions).is_err());
    }

    #[test]
    fn test_credits_overflowing_together_are_reported() {
        let transactions = vec![
            tx(1, -forty_octillion(), "A"),
            tx(2, forty_octillion(), "X"),
            tx(3, forty_octillion(), "X"),
        ];

        assert!(matches!(
            income_total(&transactions),
            Err(LedgerError::ArithmeticOverflow { .. })
        ));
    }
}
