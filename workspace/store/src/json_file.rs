use std::path::{Path, PathBuf};

use async_trait::async_trait;
use model::{Account, Debt, RecurringDefinition, Transaction};
use tracing::{debug, trace};

use crate::{LedgerDocument, LedgerStore, Result};

/// File-backed store: the entire ledger lives in one JSON document.
///
/// Every operation reads the document fresh and writes it back whole. The
/// logical model is single-user single-writer, so there is no file locking;
/// concurrent writers would be a deployment error, not a supported mode.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty ledger document, creating parent directories as
    /// needed. Refuses to clobber an existing file.
    pub async fn init(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if tokio::fs::try_exists(&path).await? {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("store file {} already exists", path.display()),
            )
            .into());
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let store = Self { path };
        store.save(&LedgerDocument::default()).await?;
        Ok(store)
    }

    async fn load(&self) -> Result<LedgerDocument> {
        trace!(path = %self.path.display(), "loading ledger document");
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save(&self, document: &LedgerDocument) -> Result<()> {
        debug!(path = %self.path.display(), "writing ledger document");
        let raw = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn update(&self, apply: impl FnOnce(&mut LedgerDocument) -> Result<()>) -> Result<()> {
        let mut document = self.load().await?;
        apply(&mut document)?;
        self.save(&document).await
    }
}

#[async_trait]
impl LedgerStore for JsonFileStore {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.load().await?.transactions)
    }

    async fn list_recurring_definitions(&self) -> Result<Vec<RecurringDefinition>> {
        Ok(self.load().await?.recurring_definitions)
    }

    async fn list_debts(&self) -> Result<Vec<Debt>> {
        Ok(self.load().await?.debts)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.load().await?.accounts)
    }

    async fn put_transaction(&self, tx: Transaction) -> Result<()> {
        self.update(|doc| {
            doc.upsert_transaction(tx);
            Ok(())
        })
        .await
    }

    async fn put_recurring_definition(&self, def: RecurringDefinition) -> Result<()> {
        self.update(|doc| {
            doc.upsert_recurring(def);
            Ok(())
        })
        .await
    }

    async fn put_debt(&self, debt: Debt) -> Result<()> {
        self.update(|doc| {
            doc.upsert_debt(debt);
            Ok(())
        })
        .await
    }

    async fn put_account(&self, account: Account) -> Result<()> {
        self.update(|doc| {
            doc.upsert_account(account);
            Ok(())
        })
        .await
    }

    async fn delete_recurring_definition(&self, id: &str) -> Result<()> {
        self.update(|doc| doc.remove_recurring(id)).await
    }

    async fn delete_debt(&self, id: &str) -> Result<()> {
        self.update(|doc| doc.remove_debt(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use model::Frequency;
    use rust_decimal::Decimal;

    fn definition(id: &str) -> RecurringDefinition {
        RecurringDefinition {
            id: id.to_string(),
            name: "Streaming".to_string(),
            amount: Decimal::new(19900, 2),
            frequency: Frequency::Monthly,
            next_date: NaiveDate::from_ymd_opt(2025, 4, 15).unwrap(),
        }
    }

    #[tokio::test]
    async fn init_then_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        let store = JsonFileStore::init(&path).await.unwrap();

        store.put_recurring_definition(definition("r1")).await.unwrap();

        // A second handle over the same file sees the write.
        let reopened = JsonFileStore::new(&path);
        let defs = reopened.list_recurring_definitions().await.unwrap();
        assert_eq!(defs, vec![definition("r1")]);
    }

    #[tokio::test]
    async fn init_refuses_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        JsonFileStore::init(&path).await.unwrap();
        assert!(JsonFileStore::init(&path).await.is_err());
    }

    #[tokio::test]
    async fn missing_collections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        tokio::fs::write(&path, br#"{"transactions": []}"#).await.unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.list_debts().await.unwrap().is_empty());
        assert!(store.list_accounts().await.unwrap().is_empty());
    }
}
