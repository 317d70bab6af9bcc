//! Transport-layer types shared between the core and its collaborators.
//! These structs mirror what the service layer hands to the UI side of the
//! boundary, so a consumer can deserialize snapshots and issue settlement
//! requests without depending on the engine crates.

mod cashflow;
mod debts;
mod requests;

pub use cashflow::{CashflowSummary, WeekdayFlow};
pub use debts::DebtOverview;
pub use requests::{
    NewDebtRequest, NewRecurringRequest, NewTransactionRequest, SettlementRequest,
};
