use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;
use common::{NewDebtRequest, NewRecurringRequest, NewTransactionRequest};
use rust_decimal::Decimal;

use super::open_state;
use crate::config::Config;
use crate::service::records;

#[derive(Subcommand)]
pub enum RecordCommand {
    /// A one-off ledger entry
    Transaction {
        #[arg(long)]
        name: String,
        /// Amount in major currency units; expenses may be given unsigned
        #[arg(long)]
        amount: Decimal,
        /// income or expense
        #[arg(long = "type")]
        kind: String,
        #[arg(long)]
        date: NaiveDate,
        /// paid, received, or pending (defaults by type)
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// A recurring obligation template
    Recurring {
        #[arg(long)]
        name: String,
        #[arg(long)]
        amount: Decimal,
        /// weekly, biweekly, monthly, or yearly
        #[arg(long)]
        frequency: String,
        #[arg(long)]
        next_date: NaiveDate,
    },
    /// An installment debt
    Debt {
        #[arg(long)]
        name: String,
        #[arg(long)]
        total_amount: Decimal,
        #[arg(long)]
        minimum_payment: Decimal,
        #[arg(long)]
        next_payment_date: NaiveDate,
        /// weekly, biweekly, or monthly
        #[arg(long)]
        payment_frequency: String,
        /// Derived from the principal and payment when omitted
        #[arg(long)]
        total_installments: Option<u32>,
    },
}

pub async fn run(config: &Config, command: RecordCommand) -> Result<()> {
    let state = open_state(config);
    match command {
        RecordCommand::Transaction { name, amount, kind, date, status, method, category } => {
            let tx = records::record_transaction(
                &state,
                NewTransactionRequest { name, amount, kind, date, status, method, category },
            )
            .await?;
            println!("recorded transaction `{}` [{}]", tx.name, tx.id);
        }
        RecordCommand::Recurring { name, amount, frequency, next_date } => {
            let definition = records::record_recurring(
                &state,
                NewRecurringRequest { name, amount, frequency, next_date },
            )
            .await?;
            println!("recorded recurring `{}` [{}]", definition.name, definition.id);
        }
        RecordCommand::Debt {
            name,
            total_amount,
            minimum_payment,
            next_payment_date,
            payment_frequency,
            total_installments,
        } => {
            let debt = records::record_debt(
                &state,
                NewDebtRequest {
                    name,
                    total_amount,
                    minimum_payment,
                    next_payment_date,
                    payment_frequency,
                    total_installments,
                },
            )
            .await?;
            println!("recorded debt `{}` [{}]", debt.name, debt.id);
        }
    }
    Ok(())
}
