use chrono::NaiveDate;
use model::{
    Debt, RecurringDefinition, Transaction, TransactionKind, TransactionSource, TransactionStatus,
};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::schedule;

/// The definition write that accompanies a posted settlement, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleUpdate {
    Recurring(RecurringDefinition),
    Debt(Debt),
    /// Manual pending entries have no backing schedule.
    None,
}

/// Result of settling one obligation: the transaction to post and the
/// schedule write that must follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    pub posted: Transaction,
    pub update: ScheduleUpdate,
}

/// Settles one cycle of a recurring obligation.
///
/// The posted entry is a fresh real transaction (new id, `source=manual`) —
/// the virtual projection's synthetic id is discarded, never persisted.
/// The definition advances from its *scheduled* date, not from `today`, so
/// paying late does not push the whole schedule forward.
#[instrument(skip(definition), fields(id = %definition.id, next_date = %definition.next_date))]
pub fn settle_recurring(
    definition: &RecurringDefinition,
    settled_via: Option<String>,
    today: NaiveDate,
) -> Result<Settlement> {
    if definition.amount < Decimal::ZERO {
        return Err(ComputeError::NegativeAmount {
            field: "amount",
            value: definition.amount,
        });
    }

    let posted = Transaction {
        id: model::new_id(),
        name: definition.name.clone(),
        amount: -definition.amount.abs(),
        kind: TransactionKind::Expense,
        date: today,
        status: TransactionStatus::Paid,
        method: settled_via,
        category: None,
        source: TransactionSource::Manual,
    };

    let mut updated = definition.clone();
    updated.next_date = schedule::advance(definition.next_date, definition.frequency)?;
    debug!(next_date = %updated.next_date, "recurring schedule advanced");

    Ok(Settlement { posted, update: ScheduleUpdate::Recurring(updated) })
}

/// The automatic payment for one debt installment.
///
/// An explicit plan splits the principal evenly; otherwise the minimum
/// payment applies; a debt with neither is a one-shot and pays off the
/// whole remaining balance.
pub fn debt_payment_amount(debt: &Debt) -> Decimal {
    match debt.total_installments {
        Some(n) if n > 0 => debt.total_amount / Decimal::from(n),
        _ if debt.minimum_payment > Decimal::ZERO => debt.minimum_payment,
        _ => debt.current_balance,
    }
}

/// Settles one installment of a debt.
///
/// The balance decrements by the actual payment amount — the authoritative
/// balance is principal minus verified payments, never re-derived from the
/// installment counter alone.
#[instrument(skip(debt), fields(id = %debt.id, next_payment = %debt.next_payment_date))]
pub fn settle_debt(debt: &Debt, settled_via: Option<String>, today: NaiveDate) -> Result<Settlement> {
    if debt.current_balance < Decimal::ZERO {
        return Err(ComputeError::NegativeAmount {
            field: "current_balance",
            value: debt.current_balance,
        });
    }
    // Validates the denormalized inputs against the state this settlement
    // would produce: negative magnitudes are rejected, and so is paying an
    // installment beyond a completed plan.
    crate::debt::amortize(
        debt.total_amount,
        debt.minimum_payment,
        debt.installments_paid + 1,
        debt.total_installments,
    )?;

    let payment = debt_payment_amount(debt);
    let posted = Transaction {
        id: model::new_id(),
        name: debt.name.clone(),
        amount: -payment.abs(),
        kind: TransactionKind::Expense,
        date: today,
        status: TransactionStatus::Paid,
        method: settled_via,
        category: None,
        source: TransactionSource::Manual,
    };

    let mut updated = debt.clone();
    updated.installments_paid = debt.installments_paid + 1;
    updated.current_balance = (debt.current_balance - payment).max(Decimal::ZERO);
    updated.next_payment_date =
        schedule::advance(debt.next_payment_date, debt.payment_frequency)?;
    debug!(
        %payment,
        balance = %updated.current_balance,
        installments_paid = updated.installments_paid,
        "debt installment settled"
    );

    Ok(Settlement { posted, update: ScheduleUpdate::Debt(updated) })
}

/// Settles a manually recorded pending expense in place: same id, same
/// date, same amount, status flips to paid. Nothing advances because
/// nothing schedules it.
pub fn settle_manual(tx: &Transaction) -> Settlement {
    let mut posted = tx.clone();
    posted.status = TransactionStatus::Paid;
    Settlement { posted, update: ScheduleUpdate::None }
}
