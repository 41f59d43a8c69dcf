//! Session replay
//!
//! Applies a stream of session actions to a ledger engine, the way the banking
//! screens would issue them one after another. A rejected action is logged
//! with the message the user would have seen, and the replay moves on; the
//! ledger is unchanged by it.
//!
//! ```no_run
//! use rust_banking_ledger::config::SessionConfig;
//! use rust_banking_ledger::core::LedgerEngine;
//! use rust_banking_ledger::replay::replay_file;
//! use std::path::Path;
//!
//! let mut engine = LedgerEngine::new(SessionConfig::default()).unwrap();
//! let summary = replay_file(Path::new("session.csv"), &mut engine).unwrap();
//! println!("{} applied, {} rejected", summary.applied, summary.rejected);
//! ```

use crate::core::{ActionOutcome, Clock, LedgerEngine};
use crate::io::ActionReader;
use crate::types::{format_brl, LedgerError, SessionAction};
use std::path::Path;

/// Counts of what happened during a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Actions applied (including reclassify edits of unknown ids)
    pub applied: usize,
    /// Actions rejected by validation or unreadable rows
    pub rejected: usize,
}

/// Apply every action in order
pub fn replay<C, I>(engine: &mut LedgerEngine<C>, actions: I) -> ReplaySummary
where
    C: Clock,
    I: IntoIterator<Item = Result<SessionAction, LedgerError>>,
{
    let mut summary = ReplaySummary::default();

    for result in actions {
        let action = match result {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable action");
                summary.rejected += 1;
                continue;
            }
        };

        match engine.process(action) {
            Ok(ActionOutcome::Recorded(_)) => summary.applied += 1,
            Ok(ActionOutcome::Reclassified { id, found }) => {
                if !found {
                    tracing::debug!(id, "category edit for unknown transaction dropped");
                }
                summary.applied += 1;
            }
            Err(e) => {
                tracing::warn!(error = %e, message = %e.user_message(), "action rejected");
                summary.rejected += 1;
            }
        }
    }

    tracing::info!(
        applied = summary.applied,
        rejected = summary.rejected,
        balance = %format_brl(engine.balance()),
        cashback = %format_brl(engine.cashback()),
        "replay finished"
    );
    summary
}

/// Open a session script and replay it
///
/// # Errors
///
/// Returns an error only if the script cannot be opened. Bad rows and
/// rejected actions are counted in the summary.
pub fn replay_file<C: Clock>(
    path: &Path,
    engine: &mut LedgerEngine<C>,
) -> Result<ReplaySummary, LedgerError> {
    let reader = ActionReader::new(path)?;
    Ok(replay(engine, reader))
}
