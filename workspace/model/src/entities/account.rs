use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of balance an account holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Debit,
    Credit,
    Cash,
}

/// A balance-holding entity.
///
/// The engine never debits accounts directly; balance changes are implied
/// by posted transactions. Accounts are referenced by name when choosing
/// where a settlement is paid from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub kind: AccountKind,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}
