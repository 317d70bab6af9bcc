use chrono::Datelike;
use common::{CashflowSummary, WeekdayFlow};
use model::{Transaction, TransactionKind, TransactionStatus};
use rust_decimal::Decimal;
use tracing::trace;

/// Short labels for the Monday-first buckets of [`weekday_flows`].
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Folds the reconciled ledger into the dashboard scalars.
///
/// Status-dependent accounting rules:
/// - positive income counts as income; negative income is a reversal and
///   counts as expense instead;
/// - `balance` is net realized cash: received income plus non-pending
///   expenses (which carry their negative sign). Pending expenses never
///   touch it;
/// - `payable` is the magnitude of pending expenses;
/// - `expense` is the magnitude of non-pending expenses.
pub fn summarize(transactions: &[Transaction]) -> CashflowSummary {
    let mut summary = CashflowSummary::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => {
                if tx.amount >= Decimal::ZERO {
                    summary.income += tx.amount;
                } else {
                    summary.expense += tx.amount.abs();
                }
                if tx.status == TransactionStatus::Received {
                    summary.balance += tx.amount;
                }
            }
            TransactionKind::Expense => {
                if tx.status == TransactionStatus::Pending {
                    summary.payable += tx.amount.abs();
                } else {
                    summary.expense += tx.amount.abs();
                    summary.balance += tx.amount;
                }
            }
        }
    }
    trace!(?summary, entries = transactions.len(), "summarized ledger");
    summary
}

/// Buckets ledger flow by weekday, Monday first.
///
/// The index mapping is Monday=0 .. Sunday=6 regardless of any platform
/// Sunday-first convention; chrono's `num_days_from_monday` provides
/// exactly that. The weekly chart shows flow whether or not it is realized
/// yet, so statuses are not filtered here.
pub fn weekday_flows(transactions: &[Transaction]) -> [WeekdayFlow; 7] {
    let mut buckets = WEEKDAY_LABELS.map(WeekdayFlow::empty);
    for tx in transactions {
        let index = tx.date.weekday().num_days_from_monday() as usize;
        match tx.kind {
            TransactionKind::Income if tx.amount >= Decimal::ZERO => {
                buckets[index].income += tx.amount;
            }
            // Reversals and expenses both land on the expense side.
            _ => buckets[index].expense += tx.amount.abs(),
        }
    }
    buckets
}
