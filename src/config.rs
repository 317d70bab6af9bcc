use std::path::PathBuf;

/// Runtime configuration, environment-driven.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON ledger document the CLI store reads and writes.
    pub store_path: PathBuf,
}

impl Config {
    /// Reads configuration from the environment. `FLUXO_STORE` points at
    /// the ledger document and defaults to `fluxo.json` in the working
    /// directory.
    pub fn load() -> Self {
        let store_path = std::env::var("FLUXO_STORE").unwrap_or_else(|_| "fluxo.json".to_string());
        Self { store_path: store_path.into() }
    }
}
