use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use common::{CashflowSummary, DebtOverview, WeekdayFlow};
use compute::settlement::ScheduleUpdate;
use model::{Account, Transaction};
use serde::Serialize;
use store::LedgerStore;

/// Application state shared across commands.
#[derive(Clone)]
pub struct AppState {
    /// The external record store.
    pub store: Arc<dyn LedgerStore>,
    /// Obligation ids settled (or mid-settlement) since the last snapshot
    /// load. A repeat settle for a locked id is rejected until a fresh
    /// load clears the set; that is the guard against double-charging on
    /// rapid repeated requests.
    settled: Arc<Mutex<HashSet<String>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store, settled: Arc::new(Mutex::new(HashSet::new())) }
    }

    /// Claims the settlement lock for an obligation. Returns false when the
    /// obligation was already settled in this session.
    pub fn lock_settlement(&self, obligation_id: &str) -> bool {
        let mut settled = self.settled.lock().unwrap_or_else(|e| e.into_inner());
        settled.insert(obligation_id.to_string())
    }

    /// Releases every settlement lock. Called when a fresh snapshot is
    /// assembled — a load *is* the reload the lock waits for.
    pub fn clear_settlement_locks(&self) {
        self.settled.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

/// One authoritative, immutable view of the ledger: the reconciled
/// transaction list plus everything the dashboard derives from it.
/// Recomputed from storage on every load; nothing in it is cached.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    /// Persisted entries with this week's virtual projections merged in.
    pub transactions: Vec<Transaction>,
    pub summary: CashflowSummary,
    /// Monday-first weekday buckets.
    pub weekly_flow: Vec<WeekdayFlow>,
    /// Per-debt amortization views, active debts first.
    pub debts: Vec<DebtOverview>,
    pub accounts: Vec<Account>,
}

/// What a settlement produced: the posted ledger entry and the schedule
/// write that accompanied it.
#[derive(Debug, Clone)]
pub struct SettlementOutcome {
    pub posted: Transaction,
    pub update: ScheduleUpdate,
}
