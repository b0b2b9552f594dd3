//! # netsettle-engine
//!
//! **Settlement plane**: turns a net-balance snapshot into an ordered
//! payment sequence that zeroes every balance.
//!
//! The engine is pure — no side effects, no ledger access, no state
//! between runs:
//!
//! ```text
//! settle(&NetBalances) -> Settlement
//! ```
//!
//! ## Algorithm
//!
//! Greedy extremal matching: repeatedly pair the largest creditor with the
//! largest-magnitude debtor and move `min` of the two amounts. Each
//! iteration fully zeroes at least one side, so the loop terminates in at
//! most n−1 payments for n non-zero balances.

pub mod conservation;
pub mod selectors;
pub mod settle;

pub use conservation::verify_zero_sum;
pub use selectors::{CreditorQueue, DebtorQueue};
pub use settle::settle;
