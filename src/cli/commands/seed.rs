use anyhow::Result;
use chrono::{Days, Local};
use model::{Account, AccountKind, Frequency};
use rust_decimal::Decimal;
use tracing::info;

use super::open_state;
use crate::config::Config;
use crate::service::records;
use common::{NewDebtRequest, NewRecurringRequest, NewTransactionRequest};

/// Populates the store with a small, self-consistent demo ledger: two
/// accounts, a salary, a couple of expenses, recurring obligations due
/// this week, and an installment debt.
pub async fn seed(config: &Config) -> Result<()> {
    let state = open_state(config);
    let today = Local::now().date_naive();
    let in_two_days = today
        .checked_add_days(Days::new(2))
        .unwrap_or(today);

    for account in [
        Account {
            id: model::new_id(),
            name: "Nomina".to_string(),
            kind: AccountKind::Debit,
            balance: Decimal::new(1250000, 2),
        },
        Account {
            id: model::new_id(),
            name: "Efectivo".to_string(),
            kind: AccountKind::Cash,
            balance: Decimal::new(80000, 2),
        },
    ] {
        state.store.put_account(account).await?;
    }

    records::record_transaction(
        &state,
        NewTransactionRequest {
            name: "Salary".to_string(),
            amount: Decimal::new(1800000, 2),
            kind: "income".to_string(),
            date: today,
            status: Some("received".to_string()),
            method: Some("Nomina".to_string()),
            category: Some("Work".to_string()),
        },
    )
    .await?;
    records::record_transaction(
        &state,
        NewTransactionRequest {
            name: "Groceries".to_string(),
            amount: Decimal::new(64050, 2),
            kind: "expense".to_string(),
            date: today,
            status: Some("paid".to_string()),
            method: Some("Efectivo".to_string()),
            category: Some("Food".to_string()),
        },
    )
    .await?;

    records::record_recurring(
        &state,
        NewRecurringRequest {
            name: "Internet".to_string(),
            amount: Decimal::new(45000, 2),
            frequency: "monthly".to_string(),
            next_date: in_two_days,
        },
    )
    .await?;
    records::record_recurring(
        &state,
        NewRecurringRequest {
            name: "Car insurance".to_string(),
            amount: Decimal::new(980000, 2),
            frequency: "yearly".to_string(),
            next_date: today
                .checked_add_days(Days::new(90))
                .unwrap_or(today),
        },
    )
    .await?;

    records::record_debt(
        &state,
        NewDebtRequest {
            name: "Laptop".to_string(),
            total_amount: Decimal::new(2400000, 2),
            minimum_payment: Decimal::new(200000, 2),
            next_payment_date: in_two_days,
            payment_frequency: "biweekly".to_string(),
            total_installments: Some(12),
        },
    )
    .await?;

    info!("demo ledger seeded");
    println!("seeded demo ledger at {}", config.store_path.display());
    Ok(())
}
