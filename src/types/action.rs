//! Session actions
//!
//! The screens around the ledger express every mutation as one of these
//! actions. Debit flows share a single [`DebitRequest`] so the transfer and
//! top-up screens go through the same validation.

use super::category::Category;
use super::transaction::TransactionId;

/// Saved PIX contact
///
/// A transfer to a favorite's key is recorded under the contact's name
/// instead of the raw key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixFavorite {
    pub name: String,
    pub key: String,
}

impl PixFavorite {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        PixFavorite {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Target of a user-initiated debit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebitRequest {
    /// PIX transfer to a key (e-mail, phone, CPF or random key)
    Pix { key: String },

    /// Mobile credit for a phone number with an operator
    MobileTopUp { phone: String, operator: String },

    /// Top-up of a prepaid service such as a transit card
    ServiceTopUp { service: String },
}

impl DebitRequest {
    /// Required fields as `(name, value)` pairs, checked for emptiness
    pub fn required_fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            DebitRequest::Pix { key } => vec![("key", key.as_str())],
            DebitRequest::MobileTopUp { phone, operator } => {
                vec![("phone", phone.as_str()), ("operator", operator.as_str())]
            }
            DebitRequest::ServiceTopUp { service } => vec![("service", service.as_str())],
        }
    }

    /// Name recorded on the resulting transaction
    ///
    /// A PIX key matching one of `favorites` is replaced by the favorite's
    /// name.
    pub fn transaction_name(&self, favorites: &[PixFavorite]) -> String {
        match self {
            DebitRequest::Pix { key } => {
                let key = key.trim();
                let recipient = favorites
                    .iter()
                    .find(|favorite| favorite.key == key)
                    .map_or(key, |favorite| favorite.name.as_str());
                format!("PIX enviado para {}", recipient)
            }
            DebitRequest::MobileTopUp { phone, operator } => {
                format!("Recarga {} - {}", operator.trim(), phone.trim())
            }
            DebitRequest::ServiceTopUp { service } => format!("Recarga {}", service.trim()),
        }
    }

    /// Category recorded on the resulting transaction
    pub fn category(&self) -> Category {
        match self {
            DebitRequest::Pix { .. } => Category::PIX.into(),
            DebitRequest::MobileTopUp { .. } | DebitRequest::ServiceTopUp { .. } => {
                Category::RECHARGE.into()
            }
        }
    }
}

/// One mutation requested by the surrounding screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Debit the balance; `amount` is the raw text the user typed
    Debit {
        request: DebitRequest,
        amount: String,
    },

    /// Move the whole cashback reservoir into the balance
    RedeemCashback,

    /// Relabel one transaction
    Reclassify {
        id: TransactionId,
        category: Category,
    },
}
