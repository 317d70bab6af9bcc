pub mod dashboard;
pub mod init_store;
pub mod record;
pub mod remove;
pub mod seed;
pub mod settle;

use std::sync::Arc;

use crate::config::Config;
use crate::schemas::AppState;
use store::JsonFileStore;

/// Opens the configured ledger document and wraps it in application state.
pub(crate) fn open_state(config: &Config) -> AppState {
    AppState::new(Arc::new(JsonFileStore::new(&config.store_path)))
}
