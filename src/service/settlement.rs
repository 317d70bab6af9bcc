use chrono::NaiveDate;
use common::SettlementRequest;
use compute::settlement::{self as engine, ScheduleUpdate, Settlement};
use tracing::{info, instrument, warn};

use super::{Result, ServiceError};
use crate::schemas::{AppState, SettlementOutcome};

/// Settles one pending obligation: resolves the request against the store,
/// runs the pure settlement transition, then performs the two sequential
/// writes.
///
/// The writes are best-effort, not atomic: the posted transaction lands
/// first, and a failure on the schedule write propagates without rollback.
/// The consequence is bounded — the obligation shows as due again on the
/// next load and can be re-settled early next cycle.
#[instrument(skip(state, request), fields(obligation = %request.obligation_id()))]
pub async fn settle(
    state: &AppState,
    request: SettlementRequest,
    today: NaiveDate,
) -> Result<SettlementOutcome> {
    let obligation_id = request.obligation_id().to_string();
    if !state.lock_settlement(&obligation_id) {
        warn!("repeat settlement blocked until the next snapshot load");
        return Err(ServiceError::AlreadySettled { id: obligation_id });
    }

    let settlement = match request {
        SettlementRequest::Recurring { id, method, account } => {
            let definition = state
                .store
                .list_recurring_definitions()
                .await?
                .into_iter()
                .find(|d| d.id == id)
                .ok_or(ServiceError::UnknownObligation { kind: "recurring definition", id })?;
            engine::settle_recurring(&definition, account.or(method), today)?
        }
        SettlementRequest::Debt { id, method, account } => {
            let debt = state
                .store
                .list_debts()
                .await?
                .into_iter()
                .find(|d| d.id == id)
                .ok_or(ServiceError::UnknownObligation { kind: "debt", id })?;
            engine::settle_debt(&debt, account.or(method), today)?
        }
        SettlementRequest::Manual { id } => {
            let tx = state
                .store
                .list_transactions()
                .await?
                .into_iter()
                .find(|t| t.id == id && t.is_manual_pending())
                .ok_or(ServiceError::UnknownObligation { kind: "pending transaction", id })?;
            engine::settle_manual(&tx)
        }
    };

    apply(state, settlement).await
}

async fn apply(state: &AppState, settlement: Settlement) -> Result<SettlementOutcome> {
    state.store.put_transaction(settlement.posted.clone()).await?;
    match &settlement.update {
        ScheduleUpdate::Recurring(definition) => {
            state.store.put_recurring_definition(definition.clone()).await?;
        }
        ScheduleUpdate::Debt(debt) => {
            state.store.put_debt(debt.clone()).await?;
        }
        ScheduleUpdate::None => {}
    }
    info!(posted = %settlement.posted.id, "settlement applied");
    Ok(SettlementOutcome { posted: settlement.posted, update: settlement.update })
}
