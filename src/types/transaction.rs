//! Transaction-related types for the ledger
//!
//! A transaction records one monetary movement. Everything except the
//! category is fixed at creation; the category can only be changed through
//! the classification module.

use super::category::Category;
use super::money::Money;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Transaction identifier
///
/// Assigned as one past the largest id currently in the ledger.
pub type TransactionId = u64;

/// One recorded credit or debit
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique positive identifier
    pub id: TransactionId,

    /// Counterparty or purpose, e.g. `"PIX enviado para maria@email.com"`
    pub name: String,

    /// Signed amount: positive credits the balance, negative debits it
    pub amount: Money,

    /// Moment the transaction was recorded (local time)
    pub occurred_at: NaiveDateTime,

    /// Classification label
    pub category: Category,
}

impl Transaction {
    pub fn new(
        id: TransactionId,
        name: impl Into<String>,
        amount: Money,
        occurred_at: NaiveDateTime,
        category: impl Into<Category>,
    ) -> Self {
        Transaction {
            id,
            name: name.into(),
            amount,
            occurred_at,
            category: category.into(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.occurred_at.time()
    }

    pub fn is_credit(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    pub fn is_debit(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 25)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[rstest]
    #[case::credit(Decimal::new(500000, 2), true, false)]
    #[case::debit(Decimal::new(-4990, 2), false, true)]
    #[case::zero(Decimal::ZERO, false, false)]
    fn test_credit_debit_classification(
        #[case] amount: Decimal,
        #[case] credit: bool,
        #[case] debit: bool,
    ) {
        let tx = Transaction::new(1, "Salário", amount, at(), Category::SALARY);
        assert_eq!(tx.is_credit(), credit);
        assert_eq!(tx.is_debit(), debit);
    }

    #[test]
    fn test_date_and_time_components() {
        let tx = Transaction::new(3, "Salário", Decimal::new(5000, 0), at(), Category::SALARY);
        assert_eq!(tx.date(), NaiveDate::from_ymd_opt(2024, 11, 25).unwrap());
        assert_eq!(tx.time(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    }
}
