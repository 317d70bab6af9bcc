use chrono::{Datelike, Days, NaiveDate};
use model::{
    RecurringDefinition, Transaction, TransactionKind, TransactionSource, TransactionStatus,
};
use tracing::{debug, trace};

use super::pending_id;

/// The lookahead window recurring obligations are projected into:
/// today through the end of the current calendar week, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DueWindow {
    /// Window from `today` to the coming Sunday. Sunday itself yields a
    /// one-day window.
    pub fn current_week(today: NaiveDate) -> Self {
        let days_to_sunday = 6 - u64::from(today.weekday().num_days_from_monday());
        let end = today
            .checked_add_days(Days::new(days_to_sunday))
            .unwrap_or(today);
        Self { start: today, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Synthesizes virtual pending entries for every definition due this week.
///
/// A projection is suppressed when the ledger already holds a manually
/// recorded expense with the same name that is paid or pending — the user
/// beat the projector to it for this period.
///
/// Pure and idempotent: identical inputs produce the identical set, and
/// definitions outside the window produce nothing. Removing stale prior
/// projections is [`super::reconcile::reconcile`]'s job.
pub fn project(
    definitions: &[RecurringDefinition],
    existing: &[Transaction],
    today: NaiveDate,
) -> Vec<Transaction> {
    let window = DueWindow::current_week(today);
    debug!(
        start = %window.start,
        end = %window.end,
        definitions = definitions.len(),
        "projecting recurring obligations into the due window"
    );

    let mut projected = Vec::new();
    for definition in definitions {
        if !window.contains(definition.next_date) {
            trace!(
                id = %definition.id,
                next_date = %definition.next_date,
                "definition outside the due window"
            );
            continue;
        }
        if recorded_manually(existing, &definition.name) {
            trace!(
                id = %definition.id,
                name = %definition.name,
                "suppressing projection; obligation already recorded manually"
            );
            continue;
        }
        projected.push(virtual_entry(definition));
    }
    projected
}

/// True when the ledger already carries a manual expense for this
/// obligation in the current period (paid or still pending).
fn recorded_manually(existing: &[Transaction], name: &str) -> bool {
    existing.iter().any(|tx| {
        tx.name == name
            && tx.kind == TransactionKind::Expense
            && matches!(tx.status, TransactionStatus::Paid | TransactionStatus::Pending)
            && tx.source != TransactionSource::Recurring
    })
}

fn virtual_entry(definition: &RecurringDefinition) -> Transaction {
    Transaction {
        id: pending_id(&definition.id),
        name: definition.name.clone(),
        // Expense sign convention: projections always owe money.
        amount: -definition.amount.abs(),
        kind: TransactionKind::Expense,
        date: definition.next_date,
        status: TransactionStatus::Pending,
        method: None,
        category: None,
        source: TransactionSource::Recurring,
    }
}
