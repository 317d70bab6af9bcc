//! The storage collaborator boundary.
//!
//! The engine treats persistence as an external, single-owner record store:
//! it lists whole collections on load and writes one record at a time. The
//! [`LedgerStore`] trait is that contract; [`MemoryStore`] backs tests and
//! [`JsonFileStore`] backs the CLI. Neither is a persistence engine — both
//! stand in for whatever key-value service the deployment provides.

pub mod json_file;
pub mod memory;

use async_trait::async_trait;
use model::{Account, Debt, RecurringDefinition, Transaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed store document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("{kind} `{id}` not found")]
    NotFound { kind: &'static str, id: String },
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// The record-store interface the core consumes.
///
/// Reads return whole collections (the dashboard snapshot is one
/// authoritative fetch); writes are single-record upserts keyed by id.
/// Retries and timeouts are the collaborator's concern, not the core's.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;
    async fn list_recurring_definitions(&self) -> Result<Vec<RecurringDefinition>>;
    async fn list_debts(&self) -> Result<Vec<Debt>>;
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    async fn put_transaction(&self, tx: Transaction) -> Result<()>;
    async fn put_recurring_definition(&self, def: RecurringDefinition) -> Result<()>;
    async fn put_debt(&self, debt: Debt) -> Result<()>;
    async fn put_account(&self, account: Account) -> Result<()>;

    async fn delete_recurring_definition(&self, id: &str) -> Result<()>;
    async fn delete_debt(&self, id: &str) -> Result<()>;
}

/// The full ledger as one serializable document.
///
/// Collections keep insertion order; an upsert replaces a record in place
/// so display order stays stable across edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerDocument {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring_definitions: Vec<RecurringDefinition>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub accounts: Vec<Account>,
}

impl LedgerDocument {
    pub(crate) fn upsert_transaction(&mut self, tx: Transaction) {
        upsert(&mut self.transactions, tx);
    }

    pub(crate) fn upsert_recurring(&mut self, def: RecurringDefinition) {
        upsert(&mut self.recurring_definitions, def);
    }

    pub(crate) fn upsert_debt(&mut self, debt: Debt) {
        upsert(&mut self.debts, debt);
    }

    pub(crate) fn upsert_account(&mut self, account: Account) {
        upsert(&mut self.accounts, account);
    }

    pub(crate) fn remove_recurring(&mut self, id: &str) -> Result<()> {
        remove(&mut self.recurring_definitions, id, "recurring definition")
    }

    pub(crate) fn remove_debt(&mut self, id: &str) -> Result<()> {
        remove(&mut self.debts, id, "debt")
    }
}

trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Transaction {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for RecurringDefinition {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Debt {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Account {
    fn key(&self) -> &str {
        &self.id
    }
}

fn upsert<T: Keyed>(records: &mut Vec<T>, record: T) {
    match records.iter_mut().find(|r| r.key() == record.key()) {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

fn remove<T: Keyed>(records: &mut Vec<T>, id: &str, kind: &'static str) -> Result<()> {
    let before = records.len();
    records.retain(|r| r.key() != id);
    if records.len() == before {
        return Err(StoreError::NotFound { kind, id: id.to_string() });
    }
    Ok(())
}
