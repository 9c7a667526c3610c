//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// Errors raised while validating core inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid passenger: {0}")]
    Passenger(String),
}

/// Shorthand result type for `dq-core`.
pub type CoreResult<T> = Result<T, CoreError>;
