//! # netsettle-types
//!
//! Shared types and errors for the **NetSettle** debt netting engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identity**: [`Participant`], [`TransactionId`]
//! - **Input model**: [`Transaction`]
//! - **Output model**: [`Payment`], [`Settlement`]
//! - **Balance model**: [`NetBalances`] plus the [`net_sum`] / [`apply_payment`] helpers
//! - **Errors**: [`NetsettleError`] with `NS_ERR_` prefix codes

pub mod balance;
pub mod error;
pub mod participant;
pub mod payment;
pub mod transaction;

// Re-export all primary types at crate root for ergonomic imports:
//   use netsettle_types::{Participant, Transaction, Payment, ...};

pub use balance::*;
pub use error::*;
pub use participant::*;
pub use payment::*;
pub use transaction::*;
