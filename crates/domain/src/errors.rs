//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Direction code outside the 1/2 range used by the provider
    #[error("Invalid bus direction code: {0} (expected 1 or 2)")]
    InvalidDirection(i64),

    /// Bus line identifier was empty
    #[error("Bus line must not be empty")]
    EmptyBusLine,
}
