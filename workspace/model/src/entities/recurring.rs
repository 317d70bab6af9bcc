use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How often a recurring obligation comes due.
///
/// `Biweekly` is the twice-a-month pay cycle (fifteen days), not
/// every-other-week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Yearly,
}

/// Raised when a frequency string from the outside world matches no known
/// schedule. The engine itself only ever sees the closed enum.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized frequency `{0}`")]
pub struct ParseFrequencyError(pub String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(ParseFrequencyError(other.to_string())),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        };
        f.write_str(name)
    }
}

/// A template describing a repeating obligation (rent, subscriptions,
/// utilities).
///
/// `next_date` is advanced exactly once per settlement, always from the
/// scheduled date, and persisted. Definitions are never deleted implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringDefinition {
    pub id: String,
    pub name: String,
    /// Unsigned magnitude of each occurrence. Projections and settlements
    /// apply the expense sign convention themselves.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub frequency: Frequency,
    /// Date of the next occurrence.
    pub next_date: NaiveDate,
}
