//! Cashback reservoir
//!
//! Cashback earned is tracked apart from the main balance. Redeeming moves the
//! whole reservoir into the balance as one `Cashback` credit and empties it.
//! Accrual happens outside the ledger; there is no way back to `HasBalance`
//! from here.

use crate::core::transaction_store::TransactionStore;
use crate::types::{Category, LedgerError, Money, Transaction};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Name recorded on redemption transactions
pub const REDEMPTION_NAME: &str = "Resgate de cashback";

/// Whether there is anything to redeem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservoirState {
    HasBalance,
    Empty,
}

/// Cashback not yet moved into the main balance
#[derive(Debug, Clone, PartialEq)]
pub struct CashbackReservoir {
    balance: Money,
}

impl CashbackReservoir {
    pub fn new(balance: Money) -> Self {
        CashbackReservoir { balance }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn state(&self) -> ReservoirState {
        if self.balance > Decimal::ZERO {
            ReservoirState::HasBalance
        } else {
            ReservoirState::Empty
        }
    }

    /// Move the whole reservoir into `store` and empty it
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - The credit recorded in the store
    /// * `Err(LedgerError)` - `EmptyReservoir` when there is nothing to redeem,
    ///   or the store's own error; in both cases nothing changes
    pub fn redeem(
        &mut self,
        store: &mut TransactionStore,
        occurred_at: NaiveDateTime,
    ) -> Result<Transaction, LedgerError> {
        if self.state() == ReservoirState::Empty {
            return Err(LedgerError::EmptyReservoir);
        }

        let transaction =
            store.append_at(REDEMPTION_NAME, self.balance, Category::CASHBACK, occurred_at)?;
        self.balance = Decimal::ZERO;

        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 11, 28)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[rstest]
    #[case::positive(Decimal::new(15678, 2), ReservoirState::HasBalance)]
    #[case::zero(Decimal::ZERO, ReservoirState::Empty)]
    #[case::negative_seed(Decimal::new(-1, 0), ReservoirState::Empty)]
    fn test_initial_state_follows_seed(#[case] seed: Decimal, #[case] expected: ReservoirState) {
        assert_eq!(CashbackReservoir::new(seed).state(), expected);
    }

    #[test]
    fn test_redeem_moves_everything_into_the_balance() {
        let mut store = TransactionStore::new();
        let mut reservoir = CashbackReservoir::new(Decimal::new(15678, 2));

        let tx = reservoir.redeem(&mut store, at()).unwrap();

        assert_eq!(tx.amount, Decimal::new(15678, 2));
        assert_eq!(tx.category, Category::CASHBACK);
        assert_eq!(tx.name, REDEMPTION_NAME);
        assert_eq!(store.balance(), Decimal::new(15678, 2));
        assert_eq!(reservoir.balance(), Decimal::ZERO);
        assert_eq!(reservoir.state(), ReservoirState::Empty);
    }

    #[test]
    fn test_second_redeem_fails_without_recording() {
        let mut store = TransactionStore::new();
        let mut reservoir = CashbackReservoir::new(Decimal::new(15678, 2));
        reservoir.redeem(&mut store, at()).unwrap();

        let result = reservoir.redeem(&mut store, at());

        assert!(matches!(result.unwrap_err(), LedgerError::EmptyReservoir));
        assert_eq!(store.len(), 1);
        assert_eq!(store.balance(), Decimal::new(15678, 2));
    }

    #[test]
    fn test_failed_append_keeps_reservoir() {
        let mut store = TransactionStore::new();
        store.append_at("Big", Decimal::MAX, "Outros", at()).unwrap();
        let mut reservoir = CashbackReservoir::new(Decimal::new(15678, 2));

        let result = reservoir.redeem(&mut store, at());

        assert!(matches!(
            result.unwrap_err(),
            LedgerError::ArithmeticOverflow { .. }
        ));
        assert_eq!(reservoir.balance(), Decimal::new(15678, 2));
        assert_eq!(store.len(), 1);
    }
}
