//! Error types for the CallAuction clearing kernel.
//!
//! All errors use the `CA_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 9xx: Configuration / internal errors
//!
//! The clearing engine itself is infallible for well-formed input; these
//! errors are raised by the validation gate and the configuration layer.

use thiserror::Error;

/// Central error enum for all CallAuction operations.
#[derive(Debug, Error)]
pub enum AuctionError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The order failed validation (bad side tag, quantity, price, etc.).
    #[error("CA_ERR_101: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    /// The snapshot holds more orders than one auction round accepts.
    #[error("CA_ERR_102: Batch too large: {count} orders exceeds limit of {limit}")]
    BatchTooLarge { count: usize, limit: usize },

    // =================================================================
    // Configuration / Internal (9xx)
    // =================================================================
    /// Configuration error (malformed config document, bad values, etc.).
    #[error("CA_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AuctionError>;

impl From<serde_json::Error> for AuctionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}
