use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::recurring::Frequency;

/// An amortized obligation paid down in tracked installments.
///
/// `current_balance` is a persisted cache of the authoritative value
/// `total_amount` minus verified payments; the amortization calculator is
/// the only place it is derived. A debt is considered settled once the
/// balance drops under a small epsilon that absorbs rounding residue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: String,
    pub name: String,
    /// Original principal.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    /// Per-installment payment.
    #[serde(with = "rust_decimal::serde::float")]
    pub minimum_payment: Decimal,
    pub next_payment_date: NaiveDate,
    /// Weekly, biweekly, or monthly; yearly installment plans do not occur.
    pub payment_frequency: Frequency,
    /// Length of the installment plan. Derived from the principal and the
    /// per-installment payment when not set explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_installments: Option<u32>,
    pub installments_paid: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub current_balance: Decimal,
}
