use std::collections::TryReserveError;

/// Reasons a `put` leaves the table unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PutError {
    #[error("[SymTable] key already present")]
    DuplicateKey,
    #[error("[SymTable] could not copy key: {0}")]
    AllocationFailure(#[from] TryReserveError),
}
