use chrono::NaiveDate;
use common::DebtOverview;
use compute::ledger::metrics;
use compute::{debt, reconciled_ledger};
use tracing::{debug, info, instrument};

use super::Result;
use crate::schemas::{AppState, DashboardSnapshot};

/// Assembles the dashboard snapshot: one authoritative fetch from the
/// store, the week's projections reconciled in, metrics folded, debts
/// summarized and ordered. Pure over the fetched data — nothing is cached
/// between loads.
#[instrument(skip(state))]
pub async fn load_dashboard(state: &AppState, today: NaiveDate) -> Result<DashboardSnapshot> {
    let transactions = state.store.list_transactions().await?;
    let definitions = state.store.list_recurring_definitions().await?;
    let mut debts = state.store.list_debts().await?;
    let accounts = state.store.list_accounts().await?;
    debug!(
        transactions = transactions.len(),
        definitions = definitions.len(),
        debts = debts.len(),
        "fetched ledger collections"
    );

    let ledger = reconciled_ledger(transactions, &definitions, today);
    let summary = metrics::summarize(&ledger);
    let weekly_flow = metrics::weekday_flows(&ledger).to_vec();

    debt::order_for_display(&mut debts);
    let mut overviews = Vec::with_capacity(debts.len());
    for record in &debts {
        let plan = debt::summarize_debt(record)?;
        overviews.push(DebtOverview {
            id: record.id.clone(),
            name: record.name.clone(),
            // The persisted balance is authoritative; the plan summary
            // fills in the installment arithmetic.
            current_balance: record.current_balance,
            amount_paid: plan.amount_paid,
            total_installments: plan.total_installments,
            installments_paid: record.installments_paid,
            remaining_installments: plan.remaining_installments,
            next_payment_date: record.next_payment_date,
            settled: debt::is_settled(record.current_balance),
        });
    }

    // A fresh snapshot is the reload the settlement lock waits for.
    state.clear_settlement_locks();

    info!(entries = ledger.len(), debts = overviews.len(), "dashboard snapshot assembled");
    Ok(DashboardSnapshot {
        transactions: ledger,
        summary,
        weekly_flow,
        debts: overviews,
        accounts,
    })
}
