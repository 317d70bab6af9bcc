use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-debt amortization view handed to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtOverview {
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
    pub total_installments: u32,
    pub installments_paid: u32,
    pub remaining_installments: u32,
    pub next_payment_date: NaiveDate,
    /// Balance is under the settlement epsilon; the debt is done and orders
    /// last in any display.
    pub settled: bool,
}
