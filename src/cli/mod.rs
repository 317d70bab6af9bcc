use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{dashboard, init_store, record, remove, seed, settle};

#[derive(Parser)]
#[command(name = "fluxo")]
#[command(about = "Personal finance tracker: weekly cash flow, recurring payments, installment debts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty ledger store file
    ///
    /// The file location comes from FLUXO_STORE (default: ./fluxo.json).
    Init,
    /// Fill the store with a small demo ledger
    Seed,
    /// Print the reconciled ledger, weekly cash flow, and debts
    Dashboard {
        /// Emit the snapshot as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Settle a pending obligation
    Settle {
        /// What backs the obligation: recurring, debt, or manual
        #[arg(long)]
        kind: String,
        /// Id of the definition, debt, or pending transaction
        #[arg(long)]
        id: String,
        /// Name of the settling account
        #[arg(long)]
        account: Option<String>,
        /// Payment method label when no account applies
        #[arg(long)]
        method: Option<String>,
    },
    /// Record a transaction, recurring definition, or debt
    #[command(subcommand)]
    Record(record::RecordCommand),
    /// Delete a recurring definition or debt
    #[command(subcommand)]
    Remove(remove::RemoveCommand),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = crate::config::Config::load();
        match self.command {
            Commands::Init => init_store::init_store(&config).await,
            Commands::Seed => seed::seed(&config).await,
            Commands::Dashboard { json } => dashboard::dashboard(&config, json).await,
            Commands::Settle { kind, id, account, method } => {
                settle::settle(&config, &kind, id, account, method).await
            }
            Commands::Record(command) => record::run(&config, command).await,
            Commands::Remove(command) => remove::run(&config, command).await,
        }
    }
}
