use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Lifecycle status of a ledger entry.
///
/// `Received` applies to income, `Paid` to expenses. A `Pending` expense is
/// money owed but not yet out the door; it never counts toward the realized
/// balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Paid,
    Received,
    Pending,
}

/// Where a ledger entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionSource {
    /// Recorded directly by the user (or produced by a settlement).
    Manual,
    /// Synthesized from a recurring definition on load.
    Recurring,
}

/// A single ledger entry.
///
/// Entries are immutable once posted except for status transitions.
/// Expenses carry a negative `amount`; income is normally positive, with a
/// negative amount meaning a reversal/correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque unique id. Real entries carry a UUID; virtual projections use
    /// the deterministic `pending-{definition id}` scheme.
    pub id: String,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Calendar date of the entry. All date math is calendar-day based.
    pub date: NaiveDate,
    pub status: TransactionStatus,
    /// Name of the settling account, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub source: TransactionSource,
}

impl Transaction {
    /// A virtual entry is a projection of a recurring definition: it exists
    /// only in the reconciled view, never in storage, and is recomputed on
    /// every load.
    pub fn is_virtual(&self) -> bool {
        self.source == TransactionSource::Recurring && self.status == TransactionStatus::Pending
    }

    /// A manually recorded expense that has not been paid yet. Unlike a
    /// virtual entry it is persisted and settles in place.
    pub fn is_manual_pending(&self) -> bool {
        self.source == TransactionSource::Manual && self.status == TransactionStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: TransactionStatus, source: TransactionSource) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            name: "Internet".to_string(),
            amount: Decimal::new(-45000, 2),
            kind: TransactionKind::Expense,
            date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            status,
            method: None,
            category: None,
            source,
        }
    }

    #[test]
    fn virtual_entries_are_pending_recurring() {
        assert!(entry(TransactionStatus::Pending, TransactionSource::Recurring).is_virtual());
        assert!(!entry(TransactionStatus::Paid, TransactionSource::Recurring).is_virtual());
        assert!(!entry(TransactionStatus::Pending, TransactionSource::Manual).is_virtual());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let tx = entry(TransactionStatus::Pending, TransactionSource::Manual);
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2025-01-06");
        assert_eq!(value["amount"], -450.0);
        // Optional fields stay off the wire entirely when unset.
        assert!(value.get("method").is_none());
    }

    #[test]
    fn deserializes_from_wire_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{
                "id": "abc",
                "name": "Salary",
                "amount": 1200.5,
                "type": "income",
                "date": "2025-03-01",
                "status": "received",
                "source": "manual"
            }"#,
        )
        .unwrap();
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.status, TransactionStatus::Received);
        assert_eq!(tx.amount, Decimal::new(12005, 1));
        assert_eq!(tx.method, None);
    }
}
