//! Error types for the NetSettle engine.
//!
//! All errors use the `NS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Transaction intake errors (recoverable — reject the input)
//! - 2xx: Settlement contract errors (programming bugs — fail fast)

use thiserror::Error;

/// Central error enum for all NetSettle operations.
#[derive(Debug, Error)]
pub enum NetsettleError {
    // =================================================================
    // Transaction Intake Errors (1xx)
    // =================================================================
    /// The transaction amount was zero or negative.
    #[error("NS_ERR_100: Invalid transaction: amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },

    /// A participant identifier was empty after trimming.
    #[error("NS_ERR_101: Invalid transaction: {role} identifier is blank")]
    BlankParticipant { role: &'static str },

    // =================================================================
    // Settlement Contract Errors (2xx)
    // =================================================================
    /// A balance snapshot passed to `settle` did not sum to zero.
    ///
    /// Unreachable through ledger snapshots; indicates a caller
    /// constructed the mapping by hand and broke the conservation
    /// invariant.
    #[error("NS_ERR_200: Unbalanced snapshot: net balances sum to {sum}, expected 0")]
    UnbalancedSnapshot { sum: i64 },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, NetsettleError>;
