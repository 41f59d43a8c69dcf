//! Classification: relabeling a transaction's category
//!
//! Reclassifying touches the category of one entry and nothing else. The
//! amount, id, name, timestamp, position and the store balance stay as they
//! were.

use crate::core::transaction_store::TransactionStore;
use crate::types::{Category, LedgerError, TransactionId};

/// Replace the category of the transaction with `id`
///
/// An unknown id is not an error: an edit can be issued against an entry the
/// screen showed earlier, and it is dropped without changing anything.
///
/// # Returns
///
/// * `Ok(true)` - The transaction was found and relabeled
/// * `Ok(false)` - No transaction has that id; the store is unchanged
/// * `Err(LedgerError)` - The store rejected the new sequence (not expected,
///   since amounts and ids are carried over untouched)
pub fn reclassify(
    store: &mut TransactionStore,
    id: TransactionId,
    category: impl Into<Category>,
) -> Result<bool, LedgerError> {
    if store.get(id).is_none() {
        tracing::debug!(id, "reclassify target not found, ignoring");
        return Ok(false);
    }

    let category = category.into();
    let relabeled = store
        .transactions()
        .iter()
        .map(|tx| {
            let mut tx = tx.clone();
            if tx.id == id {
                tx.category = category.clone();
            }
            tx
        })
        .collect();

    store.replace_all(relabeled)?;
    Ok(true)
}
