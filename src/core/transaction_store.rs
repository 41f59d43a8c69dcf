//! Transaction store: the ordered history plus the running balance
//!
//! This module provides the TransactionStore component that owns every
//! transaction of a session (newest first) and the current balance. All
//! mutation goes through [`TransactionStore::append_at`] or the crate-private
//! [`TransactionStore::replace_all`], which keeps the balance consistent with
//! the history at every point between operations.
//!
//! # Opening Balance
//!
//! A session starts from a seed balance and a seed history that need not add
//! up to it. The difference is kept as the opening balance, so the invariant
//! checked is `balance == opening_balance + sum(amounts)`.
//!
//! # Ordering
//!
//! New transactions are inserted at index 0. Existing entries keep their
//! relative order.

use crate::types::{next_transaction_id, Category, LedgerError, Money, Transaction, TransactionId};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Ordered transaction history and balance
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStore {
    /// Transactions, newest first
    transactions: Vec<Transaction>,

    /// Current balance, maintained incrementally
    balance: Money,

    /// Part of the seed balance not explained by the seed history
    opening_balance: Money,
}

impl TransactionStore {
    /// Create an empty store with a zero balance
    pub fn new() -> Self {
        TransactionStore {
            transactions: Vec::new(),
            balance: Decimal::ZERO,
            opening_balance: Decimal::ZERO,
        }
    }

    /// Create a store from a seed balance and a seed history
    ///
    /// The seed history is kept in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two seed transactions share an id
    /// - Summing the seed amounts overflows
    pub fn with_seed(balance: Money, transactions: Vec<Transaction>) -> Result<Self, LedgerError> {
        ensure_unique_ids(&transactions)?;
        let seed_total = sum_amounts(&transactions)?;
        let opening_balance = balance
            .checked_sub(seed_total)
            .ok_or_else(|| LedgerError::arithmetic_overflow("seed"))?;

        Ok(TransactionStore {
            transactions,
            balance,
            opening_balance,
        })
    }

    /// Current balance
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Balance the session started from before any seed transaction
    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up a transaction by id
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Record a new transaction at the head of the history
    ///
    /// The id is one past the largest id in the history (1 when empty). The
    /// amount is added to the balance as given: sign, available funds and
    /// category are the caller's concern.
    ///
    /// # Arguments
    ///
    /// * `name` - Counterparty or purpose
    /// * `amount` - Signed amount (negative for debits)
    /// * `category` - Classification label
    /// * `occurred_at` - Timestamp to record
    ///
    /// # Returns
    ///
    /// * `Ok(Transaction)` - A copy of the recorded transaction
    /// * `Err(LedgerError)` - If the balance would overflow; nothing is recorded
    pub fn append_at(
        &mut self,
        name: impl Into<String>,
        amount: Money,
        category: impl Into<Category>,
        occurred_at: NaiveDateTime,
    ) -> Result<Transaction, LedgerError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("append"))?;

        let transaction = Transaction::new(
            next_transaction_id(&self.transactions),
            name,
            amount,
            occurred_at,
            category,
        );

        self.transactions.insert(0, transaction.clone());
        self.balance = new_balance;

        Ok(transaction)
    }

    /// Install a new history with the same entries
    ///
    /// Used by the classification module after relabeling. The replacement
    /// must keep every id unique, the ids in the same order and the sum of
    /// amounts unchanged; the balance is therefore left as is.
    ///
    /// # Errors
    ///
    /// Returns an error and leaves the store untouched if:
    /// - Two transactions share an id
    /// - The id sequence differs from the current one
    /// - The amounts add up to a different total
    pub(crate) fn replace_all(&mut self, transactions: Vec<Transaction>) -> Result<(), LedgerError> {
        ensure_unique_ids(&transactions)?;

        let same_order = self.transactions.len() == transactions.len()
            && self
                .transactions
                .iter()
                .zip(&transactions)
                .all(|(current, replacement)| current.id == replacement.id);
        if !same_order {
            return Err(LedgerError::OrderChanged);
        }

        let expected = sum_amounts(&self.transactions)?;
        let actual = sum_amounts(&transactions)?;
        if expected != actual {
            return Err(LedgerError::BalanceMismatch { expected, actual });
        }

        self.transactions = transactions;
        Ok(())
    }

    /// Balance recomputed from the history
    ///
    /// Returns `None` if the sum overflows.
    pub fn recomputed_balance(&self) -> Option<Money> {
        sum_amounts(&self.transactions)
            .ok()
            .and_then(|total| self.opening_balance.checked_add(total))
    }

    /// Whether the running balance agrees with the history
    pub fn is_consistent(&self) -> bool {
        self.recomputed_balance() == Some(self.balance)
    }
}

impl Default for TransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_amounts(transactions: &[Transaction]) -> Result<Money, LedgerError> {
    transactions.iter().try_fold(Decimal::ZERO, |total, tx| {
        total
            .checked_add(tx.amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("sum"))
    })
}

fn ensure_unique_ids(transactions: &[Transaction]) -> Result<(), LedgerError> {
    let mut seen = HashSet::with_capacity(transactions.len());
    for tx in transactions {
        if !seen.insert(tx.id) {
            return Err(LedgerError::DuplicateTransaction { id: tx.id });
        }
    }
    Ok(())
}
