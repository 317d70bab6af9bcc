pub mod entities;

pub use entities::account::{Account, AccountKind};
pub use entities::debt::Debt;
pub use entities::recurring::{Frequency, ParseFrequencyError, RecurringDefinition};
pub use entities::transaction::{Transaction, TransactionKind, TransactionSource, TransactionStatus};

/// Generates a fresh opaque id for a newly persisted record.
///
/// The external store assigns no keys of its own, so ids are minted on this
/// side of the boundary.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
