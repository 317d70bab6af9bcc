use std::sync::Arc;

use async_trait::async_trait;
use common::{NewDebtRequest, NewRecurringRequest, NewTransactionRequest, SettlementRequest};
use compute::testing::{definition, expense, income, installment_debt, naive_date};
use model::{
    Account, Debt, Frequency, RecurringDefinition, Transaction, TransactionKind,
    TransactionStatus,
};
use rust_decimal::Decimal;
use store::{LedgerStore, MemoryStore, StoreError};

use crate::schemas::AppState;
use crate::service::{ServiceError, dashboard::load_dashboard, records, settlement::settle};

/// Store double whose schedule writes always fail, for exercising the
/// best-effort dual write.
struct FailingScheduleStore {
    inner: MemoryStore,
}

impl FailingScheduleStore {
    fn new() -> Self {
        Self { inner: MemoryStore::new() }
    }

    fn rejected() -> StoreError {
        StoreError::Io(std::io::Error::other("write rejected"))
    }
}

#[async_trait]
impl LedgerStore for FailingScheduleStore {
    async fn list_transactions(&self) -> store::Result<Vec<Transaction>> {
        self.inner.list_transactions().await
    }
    async fn list_recurring_definitions(&self) -> store::Result<Vec<RecurringDefinition>> {
        self.inner.list_recurring_definitions().await
    }
    async fn list_debts(&self) -> store::Result<Vec<Debt>> {
        self.inner.list_debts().await
    }
    async fn list_accounts(&self) -> store::Result<Vec<Account>> {
        self.inner.list_accounts().await
    }
    async fn put_transaction(&self, tx: Transaction) -> store::Result<()> {
        self.inner.put_transaction(tx).await
    }
    async fn put_recurring_definition(&self, _def: RecurringDefinition) -> store::Result<()> {
        Err(Self::rejected())
    }
    async fn put_debt(&self, _debt: Debt) -> store::Result<()> {
        Err(Self::rejected())
    }
    async fn put_account(&self, account: Account) -> store::Result<()> {
        self.inner.put_account(account).await
    }
    async fn delete_recurring_definition(&self, id: &str) -> store::Result<()> {
        self.inner.delete_recurring_definition(id).await
    }
    async fn delete_debt(&self, id: &str) -> store::Result<()> {
        self.inner.delete_debt(id).await
    }
}

fn state_with_memory() -> (Arc<MemoryStore>, AppState) {
    let store = Arc::new(MemoryStore::new());
    (store.clone(), AppState::new(store))
}

#[tokio::test]
async fn dashboard_merges_projections_and_metrics() {
    let (store, state) = state_with_memory();
    let today = naive_date(2025, 1, 6); // Monday

    store
        .put_transaction(income("t1", "Salary", 500, today, TransactionStatus::Received))
        .await
        .unwrap();
    store
        .put_transaction(expense("t2", "Groceries", 150, naive_date(2025, 1, 7), TransactionStatus::Paid))
        .await
        .unwrap();
    store
        .put_recurring_definition(definition("r1", "Rent", 200, Frequency::Monthly, naive_date(2025, 1, 10)))
        .await
        .unwrap();

    let snapshot = load_dashboard(&state, today).await.unwrap();

    assert_eq!(snapshot.transactions.len(), 3);
    let projected = &snapshot.transactions[2];
    assert_eq!(projected.id, "pending-r1");
    assert!(projected.is_virtual());

    assert_eq!(snapshot.summary.income, Decimal::new(50000, 2));
    assert_eq!(snapshot.summary.expense, Decimal::new(15000, 2));
    assert_eq!(snapshot.summary.payable, Decimal::new(20000, 2));
    assert_eq!(snapshot.summary.balance, Decimal::new(35000, 2));

    // Monday bucket carries the salary.
    assert_eq!(snapshot.weekly_flow[0].label, "Mon");
    assert_eq!(snapshot.weekly_flow[0].income, Decimal::new(50000, 2));

    // Virtual entries never reach storage.
    assert_eq!(store.list_transactions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn reloading_the_dashboard_is_idempotent() {
    let (_store, state) = state_with_memory();
    let today = naive_date(2025, 1, 6);
    state
        .store
        .put_recurring_definition(definition("r1", "Rent", 200, Frequency::Monthly, naive_date(2025, 1, 10)))
        .await
        .unwrap();

    let first = load_dashboard(&state, today).await.unwrap();
    let second = load_dashboard(&state, today).await.unwrap();
    assert_eq!(first.transactions, second.transactions);
}

#[tokio::test]
async fn settling_a_recurring_definition_posts_and_advances() {
    let (store, state) = state_with_memory();
    store
        .put_recurring_definition(definition("r1", "Internet", 100, Frequency::Biweekly, naive_date(2025, 1, 1)))
        .await
        .unwrap();

    let outcome = settle(
        &state,
        SettlementRequest::Recurring {
            id: "r1".to_string(),
            method: None,
            account: Some("Nomina".to_string()),
        },
        naive_date(2025, 1, 2),
    )
    .await
    .unwrap();

    assert_eq!(outcome.posted.amount, Decimal::new(-10000, 2));
    assert_eq!(outcome.posted.status, TransactionStatus::Paid);
    assert_eq!(outcome.posted.method.as_deref(), Some("Nomina"));

    let stored = store.list_transactions().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, outcome.posted.id);

    let defs = store.list_recurring_definitions().await.unwrap();
    assert_eq!(defs[0].next_date, naive_date(2025, 1, 16));
}

#[tokio::test]
async fn repeat_settlement_is_blocked_until_reload() {
    let (store, state) = state_with_memory();
    store
        .put_recurring_definition(definition("r1", "Internet", 100, Frequency::Biweekly, naive_date(2025, 1, 1)))
        .await
        .unwrap();
    let request = SettlementRequest::Recurring { id: "r1".to_string(), method: None, account: None };

    settle(&state, request.clone(), naive_date(2025, 1, 2)).await.unwrap();

    let err = settle(&state, request.clone(), naive_date(2025, 1, 2)).await.unwrap_err();
    assert!(matches!(err, ServiceError::AlreadySettled { .. }));

    // A fresh snapshot is the reload; afterwards the (now advanced)
    // obligation can be settled again.
    load_dashboard(&state, naive_date(2025, 1, 2)).await.unwrap();
    settle(&state, request, naive_date(2025, 1, 16)).await.unwrap();
    assert_eq!(store.list_transactions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn manual_pending_entry_settles_in_place() {
    let (store, state) = state_with_memory();
    store
        .put_transaction(expense("t9", "Vet", 220, naive_date(2025, 1, 9), TransactionStatus::Pending))
        .await
        .unwrap();

    let outcome = settle(
        &state,
        SettlementRequest::Manual { id: "t9".to_string() },
        naive_date(2025, 1, 11),
    )
    .await
    .unwrap();

    // Same id, same date, same amount; only the status flips.
    assert_eq!(outcome.posted.id, "t9");
    assert_eq!(outcome.posted.date, naive_date(2025, 1, 9));

    let stored = store.list_transactions().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].status, TransactionStatus::Paid);
}

#[tokio::test]
async fn settling_a_debt_updates_the_amortization_state() {
    let (store, state) = state_with_memory();
    store
        .put_debt(installment_debt("d1", "Laptop", 1200, 100, naive_date(2025, 1, 10), Frequency::Monthly))
        .await
        .unwrap();

    settle(
        &state,
        SettlementRequest::Debt { id: "d1".to_string(), method: Some("Cash".to_string()), account: None },
        naive_date(2025, 1, 10),
    )
    .await
    .unwrap();

    let debts = store.list_debts().await.unwrap();
    assert_eq!(debts[0].installments_paid, 1);
    assert_eq!(debts[0].current_balance, Decimal::new(110000, 2));
    assert_eq!(debts[0].next_payment_date, naive_date(2025, 2, 10));

    let stored = store.list_transactions().await.unwrap();
    assert_eq!(stored[0].amount, Decimal::new(-10000, 2));
    assert_eq!(stored[0].method.as_deref(), Some("Cash"));
}

#[tokio::test]
async fn schedule_write_failure_leaves_the_posted_transaction() {
    let store = Arc::new(FailingScheduleStore::new());
    let state = AppState::new(store.clone());
    store
        .inner
        .put_recurring_definition(definition("r1", "Internet", 100, Frequency::Monthly, naive_date(2025, 1, 1)))
        .await
        .unwrap();

    let err = settle(
        &state,
        SettlementRequest::Recurring { id: "r1".to_string(), method: None, account: None },
        naive_date(2025, 1, 1),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));

    // Best-effort dual write: the first write stays, the schedule did not
    // advance, and a reload is the recovery path.
    assert_eq!(store.inner.list_transactions().await.unwrap().len(), 1);
    let defs = store.inner.list_recurring_definitions().await.unwrap();
    assert_eq!(defs[0].next_date, naive_date(2025, 1, 1));
}

#[tokio::test]
async fn settling_an_unknown_obligation_fails() {
    let (_store, state) = state_with_memory();
    let err = settle(
        &state,
        SettlementRequest::Recurring { id: "ghost".to_string(), method: None, account: None },
        naive_date(2025, 1, 1),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::UnknownObligation { .. }));
}

#[tokio::test]
async fn recorded_expenses_are_normalized_to_negative() {
    let (store, state) = state_with_memory();
    let tx = records::record_transaction(
        &state,
        NewTransactionRequest {
            name: "Pharmacy".to_string(),
            amount: Decimal::new(5000, 2), // sent unsigned
            kind: "expense".to_string(),
            date: naive_date(2025, 1, 8),
            status: None,
            method: None,
            category: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(tx.amount, Decimal::new(-5000, 2));
    assert_eq!(tx.kind, TransactionKind::Expense);
    assert_eq!(tx.status, TransactionStatus::Paid); // expense default
    assert_eq!(store.list_transactions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn record_validation_blocks_bad_input() {
    let (store, state) = state_with_memory();

    let err = records::record_recurring(
        &state,
        NewRecurringRequest {
            name: "Rent".to_string(),
            amount: Decimal::new(-1000, 2),
            frequency: "monthly".to_string(),
            next_date: naive_date(2025, 2, 1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = records::record_recurring(
        &state,
        NewRecurringRequest {
            name: "Rent".to_string(),
            amount: Decimal::new(1000, 2),
            frequency: "fortnightly".to_string(),
            next_date: naive_date(2025, 2, 1),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = records::record_debt(
        &state,
        NewDebtRequest {
            name: "Loan".to_string(),
            total_amount: Decimal::new(100000, 2),
            minimum_payment: Decimal::new(10000, 2),
            next_payment_date: naive_date(2025, 2, 1),
            payment_frequency: "yearly".to_string(),
            total_installments: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    // Nothing reached storage.
    assert!(store.list_recurring_definitions().await.unwrap().is_empty());
    assert!(store.list_debts().await.unwrap().is_empty());
}

#[tokio::test]
async fn removing_a_missing_debt_reports_not_found() {
    let (_store, state) = state_with_memory();
    let err = records::remove_debt(&state, "ghost").await.unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::NotFound { .. })));
}
