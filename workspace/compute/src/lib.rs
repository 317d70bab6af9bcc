//! The recurring-obligation and ledger-reconciliation engine.
//!
//! Everything here is pure and synchronous: the service layer fetches a
//! snapshot from the store, runs these functions over it, and writes the
//! results back. No shared state, no memoization — recomputing on every
//! load is the design.

pub mod debt;
pub mod error;
pub mod ledger;
pub mod schedule;
pub mod settlement;
pub mod testing;

use chrono::NaiveDate;
use model::{RecurringDefinition, Transaction};

use ledger::{projection, reconcile};

/// Projects the recurring definitions due this week and reconciles them
/// into the stored ledger in one step. This is the path every dashboard
/// load takes.
pub fn reconciled_ledger(
    stored: Vec<Transaction>,
    definitions: &[RecurringDefinition],
    today: NaiveDate,
) -> Vec<Transaction> {
    let projected = projection::project(definitions, &stored, today);
    reconcile::reconcile(stored, projected)
}
