//! Session configuration
//!
//! A session starts from a seed balance, a seed cashback reservoir and a seed
//! history. The default is the demo account the banking screens ship with.

use crate::types::{Category, Money, PixFavorite, Transaction, TransactionId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Seed values for a new ledger session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Balance shown when the session starts
    pub seed_balance: Money,

    /// Cashback available for redemption
    pub cashback: Money,

    /// Seed history, newest first
    pub transactions: Vec<Transaction>,

    /// Saved PIX contacts
    pub favorites: Vec<PixFavorite>,
}

impl SessionConfig {
    pub fn new(seed_balance: Money, cashback: Money, transactions: Vec<Transaction>) -> Self {
        SessionConfig {
            seed_balance,
            cashback,
            transactions,
            favorites: Vec::new(),
        }
    }

    /// Replace the saved PIX contacts
    pub fn with_favorites(mut self, favorites: Vec<PixFavorite>) -> Self {
        self.favorites = favorites;
        self
    }

    /// Zero balance, no cashback, no history
    pub fn empty() -> Self {
        Self::new(Decimal::ZERO, Decimal::ZERO, Vec::new())
    }
}

impl Default for SessionConfig {
    /// The demo account: R$ 12.543,87 with R$ 156,78 of cashback
    fn default() -> Self {
        Self::new(
            Decimal::new(1254387, 2),
            Decimal::new(15678, 2),
            demo_transactions(),
        )
        .with_favorites(demo_favorites())
    }
}

// (id, name, cents, day of November 2024, hour, minute, category)
const DEMO_SEED: [(TransactionId, &str, i64, u32, u32, u32, &str); 8] = [
    (1, "Supermercado Extra", -23450, 27, 14, 32, Category::FOOD),
    (2, "Transferência recebida", 50000, 26, 10, 15, Category::TRANSFER),
    (3, "Salário", 500000, 25, 8, 0, Category::SALARY),
    (4, "Netflix", -4990, 24, 12, 0, Category::ENTERTAINMENT),
    (5, "Uber", -3240, 23, 19, 45, Category::TRANSPORT),
    (6, "Restaurante", -8900, 22, 20, 30, Category::FOOD),
    (7, "Farmácia", -6780, 21, 16, 20, Category::HEALTH),
    (8, "Cashback recebido", 1550, 20, 9, 0, Category::CASHBACK),
];

/// Seed history of the demo account, newest first
pub fn demo_transactions() -> Vec<Transaction> {
    DEMO_SEED
        .iter()
        .filter_map(|&(id, name, cents, day, hour, minute, category)| {
            let occurred_at = NaiveDate::from_ymd_opt(2024, 11, day)?.and_hms_opt(hour, minute, 0)?;
            Some(Transaction::new(
                id,
                name,
                Decimal::new(cents, 2),
                occurred_at,
                category,
            ))
        })
        .collect()
}

/// PIX contacts saved on the demo account
pub fn demo_favorites() -> Vec<PixFavorite> {
    vec![
        PixFavorite::new("Maria Santos", "maria.santos@email.com"),
        PixFavorite::new("Carlos Oliveira", "(11) 98765-4321"),
        PixFavorite::new("Ana Costa", "123.456.789-00"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_seed_is_complete_and_newest_first() {
        let transactions = demo_transactions();

        assert_eq!(transactions.len(), 8);
        assert!(transactions
            .windows(2)
            .all(|pair| pair[0].occurred_at > pair[1].occurred_at));
    }

    #[test]
    fn test_default_is_demo_account() {
        let config = SessionConfig::default();

        assert_eq!(config.seed_balance, Decimal::new(1254387, 2));
        assert_eq!(config.cashback, Decimal::new(15678, 2));
        assert_eq!(config.transactions[3].name, "Netflix");
        assert_eq!(config.favorites.len(), 3);
        assert_eq!(config.favorites[0].name, "Maria Santos");
    }

    #[test]
    fn test_empty_config() {
        let config = SessionConfig::empty();

        assert!(config.transactions.is_empty());
        assert!(config.favorites.is_empty());
        assert_eq!(config.seed_balance, Decimal::ZERO);
    }
}
