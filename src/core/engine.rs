//! Ledger engine: the session aggregate
//!
//! This module provides the LedgerEngine that owns the transaction store, the
//! cashback reservoir and the clock for one session, and routes every
//! mutation through a single place.
//!
//! The engine enforces business rules such as:
//! - Debit validation before any transfer or top-up is recorded
//! - Single-use cashback redemption
//! - Category edits that leave amounts and balance untouched

use crate::config::SessionConfig;
use crate::core::aggregation::{category_totals, CategoryTotals};
use crate::core::cashback::CashbackReservoir;
use crate::core::classification::reclassify;
use crate::core::debit::validate_debit;
use crate::core::query::filter;
use crate::core::traits::{Clock, SystemClock};
use crate::core::transaction_store::TransactionStore;
use crate::types::{
    format_brl, Category, DebitRequest, LedgerError, Money, PixFavorite, SessionAction,
    Transaction, TransactionId,
};

/// Result of a successfully applied session action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// A new transaction was recorded
    Recorded(Transaction),

    /// A category edit was applied (`found == false` means it was dropped)
    Reclassified { id: TransactionId, found: bool },
}

/// Ledger engine for one session
#[derive(Debug, Clone)]
pub struct LedgerEngine<C: Clock = SystemClock> {
    store: TransactionStore,
    reservoir: CashbackReservoir,
    favorites: Vec<PixFavorite>,
    clock: C,
}

impl LedgerEngine<SystemClock> {
    /// Create an engine stamping transactions with the wall clock
    ///
    /// # Errors
    ///
    /// Returns an error if the seed history has duplicate ids.
    pub fn new(config: SessionConfig) -> Result<Self, LedgerError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> LedgerEngine<C> {
    /// Create an engine with an explicit clock
    ///
    /// # Errors
    ///
    /// Returns an error if the seed history has duplicate ids.
    pub fn with_clock(config: SessionConfig, clock: C) -> Result<Self, LedgerError> {
        let store = TransactionStore::with_seed(config.seed_balance, config.transactions)?;
        tracing::debug!(
            balance = %store.balance(),
            cashback = %config.cashback,
            transactions = store.len(),
            "ledger session started"
        );

        Ok(LedgerEngine {
            store,
            reservoir: CashbackReservoir::new(config.cashback),
            favorites: config.favorites,
            clock,
        })
    }

    pub fn balance(&self) -> Money {
        self.store.balance()
    }

    /// Cashback not yet redeemed
    pub fn cashback(&self) -> Money {
        self.reservoir.balance()
    }

    /// All transactions, newest first
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn reservoir(&self) -> &CashbackReservoir {
        &self.reservoir
    }

    /// Saved PIX contacts used to name transfers
    pub fn favorites(&self) -> &[PixFavorite] {
        &self.favorites
    }

    /// Apply one session action
    ///
    /// Routes the action to the matching operation.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation; the ledger is unchanged.
    pub fn process(&mut self, action: SessionAction) -> Result<ActionOutcome, LedgerError> {
        match action {
            SessionAction::Debit { request, amount } => {
                self.debit(&request, &amount).map(ActionOutcome::Recorded)
            }
            SessionAction::RedeemCashback => self.redeem_cashback().map(ActionOutcome::Recorded),
            SessionAction::Reclassify { id, category } => {
                let found = self.reclassify(id, category)?;
                Ok(ActionOutcome::Reclassified { id, found })
            }
        }
    }

    /// Validate and record a user-initiated debit
    ///
    /// # Arguments
    ///
    /// * `request` - Transfer or top-up target
    /// * `amount_text` - Amount as typed (positive; recorded as a debit)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A required field or the amount is empty
    /// - The amount is not a positive number
    /// - The amount exceeds the balance
    pub fn debit(
        &mut self,
        request: &DebitRequest,
        amount_text: &str,
    ) -> Result<Transaction, LedgerError> {
        let amount = validate_debit(request, amount_text, self.store.balance())?;

        let transaction = self.store.append_at(
            request.transaction_name(&self.favorites),
            -amount,
            request.category(),
            self.clock.now(),
        )?;

        tracing::info!(
            id = transaction.id,
            name = %transaction.name,
            amount = %format_brl(amount),
            balance = %format_brl(self.store.balance()),
            "debit recorded"
        );
        Ok(transaction)
    }

    /// Send a PIX transfer
    pub fn send_pix(&mut self, key: &str, amount_text: &str) -> Result<Transaction, LedgerError> {
        self.debit(
            &DebitRequest::Pix {
                key: key.to_string(),
            },
            amount_text,
        )
    }

    /// Top up mobile credit
    pub fn mobile_top_up(
        &mut self,
        phone: &str,
        operator: &str,
        amount_text: &str,
    ) -> Result<Transaction, LedgerError> {
        self.debit(
            &DebitRequest::MobileTopUp {
                phone: phone.to_string(),
                operator: operator.to_string(),
            },
            amount_text,
        )
    }

    /// Top up a prepaid service
    pub fn service_top_up(
        &mut self,
        service: &str,
        amount_text: &str,
    ) -> Result<Transaction, LedgerError> {
        self.debit(
            &DebitRequest::ServiceTopUp {
                service: service.to_string(),
            },
            amount_text,
        )
    }

    /// Move the cashback reservoir into the balance
    ///
    /// # Errors
    ///
    /// Returns `EmptyReservoir` when there is nothing to redeem.
    pub fn redeem_cashback(&mut self) -> Result<Transaction, LedgerError> {
        let transaction = self.reservoir.redeem(&mut self.store, self.clock.now())?;

        tracing::info!(
            id = transaction.id,
            amount = %format_brl(transaction.amount),
            balance = %format_brl(self.store.balance()),
            "cashback redeemed"
        );
        Ok(transaction)
    }

    /// Relabel a transaction; unknown ids are ignored
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - The category was replaced
    /// * `Ok(false)` - No transaction has that id
    pub fn reclassify(
        &mut self,
        id: TransactionId,
        category: impl Into<Category>,
    ) -> Result<bool, LedgerError> {
        let category = category.into();
        let found = reclassify(&mut self.store, id, category.clone())?;
        if found {
            tracing::info!(id, category = %category, "transaction reclassified");
        }
        Ok(found)
    }

    /// Statement view for a search term and category (see [`filter`])
    pub fn filter(&self, search: &str, category: &str) -> Vec<&Transaction> {
        filter(self.store.transactions(), search, category)
    }

    /// Debit totals per category over the same view as [`LedgerEngine::filter`]
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the debits in the view cannot be summed.
    pub fn category_totals(
        &self,
        search: &str,
        category: &str,
    ) -> Result<CategoryTotals, LedgerError> {
        category_totals(self.filter(search, category))
    }
}
