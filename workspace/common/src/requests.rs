use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A request to settle one pending obligation.
///
/// The settlement kinds differ in which table backs them, so the request is
/// a tagged union validated at the boundary; untyped payloads never reach
/// the engine. `account` names the settling account, `method` is the
/// payment method label shown on the posted entry when no account is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SettlementRequest {
    Recurring {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
    },
    Debt {
        id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        account: Option<String>,
    },
    /// A manually recorded future-dated expense; settles in place with no
    /// backing schedule.
    Manual { id: String },
}

impl SettlementRequest {
    /// The id of the obligation being settled, regardless of kind.
    pub fn obligation_id(&self) -> &str {
        match self {
            SettlementRequest::Recurring { id, .. }
            | SettlementRequest::Debt { id, .. }
            | SettlementRequest::Manual { id } => id,
        }
    }
}

/// Form payload for recording a one-off ledger entry. Enum-ish fields stay
/// strings here and are parsed (and rejected) at the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTransactionRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: String,
    pub date: NaiveDate,
    /// Defaults by kind when omitted: income is `received`, expense `paid`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Form payload for creating a recurring definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecurringRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub frequency: String,
    pub next_date: NaiveDate,
}

/// Form payload for creating an installment debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDebtRequest {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub minimum_payment: Decimal,
    pub next_payment_date: NaiveDate,
    pub payment_frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_installments: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settlement_request_is_tagged_by_kind() {
        let request: SettlementRequest = serde_json::from_str(
            r#"{"kind": "debt", "id": "d7", "account": "Nomina"}"#,
        )
        .unwrap();
        assert_eq!(
            request,
            SettlementRequest::Debt {
                id: "d7".to_string(),
                method: None,
                account: Some("Nomina".to_string()),
            }
        );
        assert_eq!(request.obligation_id(), "d7");
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = serde_json::from_str::<SettlementRequest>(r#"{"kind": "loan", "id": "x"}"#);
        assert!(result.is_err());
    }
}
