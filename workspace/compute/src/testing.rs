//! Fixture builders shared by the engine's unit tests and by service-level
//! tests downstream. Amounts are taken in whole currency units.

use chrono::NaiveDate;
use model::{
    Debt, Frequency, RecurringDefinition, Transaction, TransactionKind, TransactionSource,
    TransactionStatus,
};
use rust_decimal::Decimal;

pub fn naive_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn major(units: i64) -> Decimal {
    Decimal::new(units * 100, 2)
}

/// A manual expense entry; the amount is stored negative per the expense
/// sign convention.
pub fn expense(
    id: &str,
    name: &str,
    amount: i64,
    date: NaiveDate,
    status: TransactionStatus,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        name: name.to_string(),
        amount: -major(amount),
        kind: TransactionKind::Expense,
        date,
        status,
        method: None,
        category: None,
        source: TransactionSource::Manual,
    }
}

/// A manual income entry.
pub fn income(
    id: &str,
    name: &str,
    amount: i64,
    date: NaiveDate,
    status: TransactionStatus,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        name: name.to_string(),
        amount: major(amount),
        kind: TransactionKind::Income,
        date,
        status,
        method: None,
        category: None,
        source: TransactionSource::Manual,
    }
}

pub fn definition(
    id: &str,
    name: &str,
    amount: i64,
    frequency: Frequency,
    next_date: NaiveDate,
) -> RecurringDefinition {
    RecurringDefinition {
        id: id.to_string(),
        name: name.to_string(),
        amount: major(amount),
        frequency,
        next_date,
    }
}

/// A fresh debt: nothing paid, balance equal to the principal, no explicit
/// installment plan.
pub fn installment_debt(
    id: &str,
    name: &str,
    total: i64,
    minimum: i64,
    next_payment_date: NaiveDate,
    payment_frequency: Frequency,
) -> Debt {
    Debt {
        id: id.to_string(),
        name: name.to_string(),
        total_amount: major(total),
        minimum_payment: major(minimum),
        next_payment_date,
        payment_frequency,
        total_installments: None,
        installments_paid: 0,
        current_balance: major(total),
    }
}
