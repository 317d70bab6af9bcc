use chrono::NaiveDate;
use model::Frequency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error types for the compute module.
///
/// Every variant is a data problem the caller must surface; the engine
/// never silently produces a negative balance or leaves a schedule stuck.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A magnitude field came in negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// More installments marked paid than the plan contains.
    #[error("installments paid ({paid}) exceed the plan length ({total})")]
    InstallmentsExceedPlan { paid: u32, total: u32 },

    /// A derived installment plan fell outside a representable count.
    #[error("derived installment plan length {0} is out of range")]
    ImplausiblePlan(Decimal),

    /// Date arithmetic left the supported calendar range.
    #[error("cannot advance {date} by one {frequency} step")]
    DateOverflow { date: NaiveDate, frequency: Frequency },
}

/// Type alias for Result with ComputeError.
pub type Result<T> = std::result::Result<T, ComputeError>;
