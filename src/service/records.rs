use common::{NewDebtRequest, NewRecurringRequest, NewTransactionRequest};
use model::{
    Debt, Frequency, RecurringDefinition, Transaction, TransactionKind, TransactionSource,
    TransactionStatus,
};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use super::{Result, ServiceError};
use crate::schemas::AppState;

/// Records a one-off ledger entry.
///
/// Enum-ish request fields arrive as strings and are parsed here, at the
/// boundary; expenses are normalized to the negative-magnitude convention
/// regardless of the sign the caller sent.
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn record_transaction(
    state: &AppState,
    request: NewTransactionRequest,
) -> Result<Transaction> {
    require_name(&request.name)?;
    let kind = parse_kind(&request.kind)?;
    let status = match &request.status {
        Some(raw) => parse_status(raw)?,
        None => default_status(kind),
    };
    let amount = match kind {
        TransactionKind::Expense => -request.amount.abs(),
        // Income keeps its sign; a negative amount is a reversal.
        TransactionKind::Income => request.amount,
    };

    let tx = Transaction {
        id: model::new_id(),
        name: request.name,
        amount,
        kind,
        date: request.date,
        status,
        method: request.method,
        category: request.category,
        source: TransactionSource::Manual,
    };
    state.store.put_transaction(tx.clone()).await?;
    info!(id = %tx.id, "transaction recorded");
    Ok(tx)
}

/// Creates a recurring definition.
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn record_recurring(
    state: &AppState,
    request: NewRecurringRequest,
) -> Result<RecurringDefinition> {
    require_name(&request.name)?;
    if request.amount < Decimal::ZERO {
        return Err(ServiceError::Validation(format!(
            "amount must not be negative (got {})",
            request.amount
        )));
    }
    let frequency = parse_frequency(&request.frequency)?;

    let definition = RecurringDefinition {
        id: model::new_id(),
        name: request.name,
        amount: request.amount,
        frequency,
        next_date: request.next_date,
    };
    state.store.put_recurring_definition(definition.clone()).await?;
    info!(id = %definition.id, "recurring definition recorded");
    Ok(definition)
}

/// Creates an installment debt. The balance starts at the principal and
/// the plan arithmetic is validated before anything reaches storage.
#[instrument(skip(state, request), fields(name = %request.name))]
pub async fn record_debt(state: &AppState, request: NewDebtRequest) -> Result<Debt> {
    require_name(&request.name)?;
    let frequency = parse_frequency(&request.payment_frequency)?;
    if frequency == Frequency::Yearly {
        return Err(ServiceError::Validation(
            "debts are paid weekly, biweekly, or monthly".to_string(),
        ));
    }
    // Rejects negative magnitudes and implausible plans up front.
    compute::debt::amortize(
        request.total_amount,
        request.minimum_payment,
        0,
        request.total_installments,
    )?;

    let debt = Debt {
        id: model::new_id(),
        name: request.name,
        total_amount: request.total_amount,
        minimum_payment: request.minimum_payment,
        next_payment_date: request.next_payment_date,
        payment_frequency: frequency,
        total_installments: request.total_installments,
        installments_paid: 0,
        current_balance: request.total_amount,
    };
    state.store.put_debt(debt.clone()).await?;
    info!(id = %debt.id, "debt recorded");
    Ok(debt)
}

/// Deletes a recurring definition. Deletion is always explicit — nothing
/// in the engine removes definitions on its own.
pub async fn remove_recurring(state: &AppState, id: &str) -> Result<()> {
    state.store.delete_recurring_definition(id).await?;
    info!(id, "recurring definition removed");
    Ok(())
}

/// Deletes a debt.
pub async fn remove_debt(state: &AppState, id: &str) -> Result<()> {
    state.store.delete_debt(id).await?;
    info!(id, "debt removed");
    Ok(())
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}

fn parse_kind(raw: &str) -> Result<TransactionKind> {
    match raw.to_ascii_lowercase().as_str() {
        "income" => Ok(TransactionKind::Income),
        "expense" => Ok(TransactionKind::Expense),
        other => Err(ServiceError::Validation(format!("unrecognized transaction type `{other}`"))),
    }
}

fn parse_status(raw: &str) -> Result<TransactionStatus> {
    match raw.to_ascii_lowercase().as_str() {
        "paid" => Ok(TransactionStatus::Paid),
        "received" => Ok(TransactionStatus::Received),
        "pending" => Ok(TransactionStatus::Pending),
        other => Err(ServiceError::Validation(format!("unrecognized status `{other}`"))),
    }
}

fn default_status(kind: TransactionKind) -> TransactionStatus {
    match kind {
        TransactionKind::Income => TransactionStatus::Received,
        TransactionKind::Expense => TransactionStatus::Paid,
    }
}

fn parse_frequency(raw: &str) -> Result<Frequency> {
    raw.parse::<Frequency>()
        .map_err(|err| ServiceError::Validation(err.to_string()))
}
