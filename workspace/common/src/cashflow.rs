use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four dashboard scalars, folded from the reconciled ledger.
///
/// `income` and `expense` are realized totals, `payable` is what is still
/// owed (pending expenses), and `balance` is net realized cash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashflowSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub payable: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

/// Income and expense flow for a single weekday bucket.
///
/// Buckets run Monday through Sunday; `label` carries the short English
/// day name ("Mon".."Sun") so consumers do not re-derive weekday order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayFlow {
    pub label: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
}

impl WeekdayFlow {
    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
        }
    }
}
