use anyhow::Result;
use clap::Subcommand;

use super::open_state;
use crate::config::Config;
use crate::service::records;

#[derive(Subcommand)]
pub enum RemoveCommand {
    /// Delete a recurring definition
    Recurring {
        #[arg(long)]
        id: String,
    },
    /// Delete a debt
    Debt {
        #[arg(long)]
        id: String,
    },
}

pub async fn run(config: &Config, command: RemoveCommand) -> Result<()> {
    let state = open_state(config);
    match command {
        RemoveCommand::Recurring { id } => {
            records::remove_recurring(&state, &id).await?;
            println!("removed recurring `{id}`");
        }
        RemoveCommand::Debt { id } => {
            records::remove_debt(&state, &id).await?;
            println!("removed debt `{id}`");
        }
    }
    Ok(())
}
