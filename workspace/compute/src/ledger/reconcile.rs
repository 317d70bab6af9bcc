use model::Transaction;
use tracing::debug;

use super::PENDING_ID_PREFIX;

/// Merges fresh projections into the stored ledger.
///
/// Every entry carrying the `pending-` id prefix is a projection from some
/// earlier load and is dropped wholesale before the fresh set is appended;
/// that is what keeps re-projection idempotent when the window moves. Real
/// persisted entries pass through untouched and keep their order.
pub fn reconcile(stored: Vec<Transaction>, projected: Vec<Transaction>) -> Vec<Transaction> {
    let before = stored.len();
    let mut ledger: Vec<Transaction> = stored
        .into_iter()
        .filter(|tx| !tx.id.starts_with(PENDING_ID_PREFIX))
        .collect();
    debug!(
        dropped = before - ledger.len(),
        projected = projected.len(),
        "reconciled ledger with fresh projections"
    );
    ledger.extend(projected);
    ledger
}
