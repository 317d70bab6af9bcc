use anyhow::Result;
use chrono::Local;

use super::open_state;
use crate::config::Config;
use crate::schemas::DashboardSnapshot;
use crate::service::dashboard::load_dashboard;

pub async fn dashboard(config: &Config, json: bool) -> Result<()> {
    let state = open_state(config);
    let today = Local::now().date_naive();
    let snapshot = load_dashboard(&state, today).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }
    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &DashboardSnapshot) {
    println!("== Ledger ==");
    for tx in &snapshot.transactions {
        println!(
            "  {}  {:<24} {:>12}  {:?}/{:?}  [{}]",
            tx.date,
            tx.name,
            tx.amount,
            tx.kind,
            tx.status,
            tx.id,
        );
    }

    let s = &snapshot.summary;
    println!("\n== This week ==");
    println!(
        "  income {:>12}   expense {:>12}   payable {:>12}   balance {:>12}",
        s.income, s.expense, s.payable, s.balance
    );

    println!("\n== Daily flow ==");
    for bucket in &snapshot.weekly_flow {
        println!("  {}  in {:>12}  out {:>12}", bucket.label, bucket.income, bucket.expense);
    }

    if !snapshot.debts.is_empty() {
        println!("\n== Debts ==");
        for debt in &snapshot.debts {
            let marker = if debt.settled { " (settled)" } else { "" };
            println!(
                "  {:<24} balance {:>12}  {}/{} installments, next {}{}  [{}]",
                debt.name,
                debt.current_balance,
                debt.installments_paid,
                debt.total_installments,
                debt.next_payment_date,
                marker,
                debt.id,
            );
        }
    }

    if !snapshot.accounts.is_empty() {
        println!("\n== Accounts ==");
        for account in &snapshot.accounts {
            println!("  {:<24} {:?} {:>12}", account.name, account.kind, account.balance);
        }
    }
}
