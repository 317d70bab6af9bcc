pub mod dashboard;
pub mod records;
pub mod settlement;

use compute::error::ComputeError;
use store::StoreError;
use thiserror::Error;

/// Errors surfaced by the service layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Compute(#[from] ComputeError),

    #[error("{kind} `{id}` not found")]
    UnknownObligation { kind: &'static str, id: String },

    /// The settlement lock: the obligation was already settled since the
    /// last snapshot load.
    #[error("`{id}` was already settled; reload the dashboard before settling it again")]
    AlreadySettled { id: String },

    #[error("validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
