use async_trait::async_trait;
use model::{Account, Debt, RecurringDefinition, Transaction};
use tokio::sync::RwLock;
use tracing::trace;

use crate::{LedgerDocument, LedgerStore, Result};

/// In-memory store used by tests and by anything that wants a throwaway
/// ledger. Single-owner semantics like the real collaborator: last write
/// wins, no locking protocol beyond the interior RwLock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<LedgerDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a prepared document, for fixture-heavy tests.
    pub fn with_document(document: LedgerDocument) -> Self {
        Self { inner: RwLock::new(document) }
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.inner.read().await.transactions.clone())
    }

    async fn list_recurring_definitions(&self) -> Result<Vec<RecurringDefinition>> {
        Ok(self.inner.read().await.recurring_definitions.clone())
    }

    async fn list_debts(&self) -> Result<Vec<Debt>> {
        Ok(self.inner.read().await.debts.clone())
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.inner.read().await.accounts.clone())
    }

    async fn put_transaction(&self, tx: Transaction) -> Result<()> {
        trace!(id = %tx.id, "storing transaction");
        self.inner.write().await.upsert_transaction(tx);
        Ok(())
    }

    async fn put_recurring_definition(&self, def: RecurringDefinition) -> Result<()> {
        trace!(id = %def.id, "storing recurring definition");
        self.inner.write().await.upsert_recurring(def);
        Ok(())
    }

    async fn put_debt(&self, debt: Debt) -> Result<()> {
        trace!(id = %debt.id, "storing debt");
        self.inner.write().await.upsert_debt(debt);
        Ok(())
    }

    async fn put_account(&self, account: Account) -> Result<()> {
        trace!(id = %account.id, "storing account");
        self.inner.write().await.upsert_account(account);
        Ok(())
    }

    async fn delete_recurring_definition(&self, id: &str) -> Result<()> {
        self.inner.write().await.remove_recurring(id)
    }

    async fn delete_debt(&self, id: &str) -> Result<()> {
        self.inner.write().await.remove_debt(id)
    }
}
