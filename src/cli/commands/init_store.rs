use anyhow::Result;
use store::JsonFileStore;
use tracing::info;

use crate::config::Config;

pub async fn init_store(config: &Config) -> Result<()> {
    let store = JsonFileStore::init(&config.store_path).await?;
    info!(path = %store.path().display(), "ledger store created");
    println!("created empty ledger at {}", store.path().display());
    Ok(())
}
