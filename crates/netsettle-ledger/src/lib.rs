//! # netsettle-ledger
//!
//! **Intake plane**: validated transaction recording and net-balance
//! accumulation.
//!
//! The [`BalanceLedger`] is the single owner of the live balance map.
//! Callers interact through exactly two contracts:
//!
//! 1. [`BalanceLedger::record`] — validate and fold one transaction into
//!    the running balances (and the journal)
//! 2. [`BalanceLedger::snapshot`] — take an independent, owned copy of the
//!    balances for settlement or display
//!
//! Settlement never touches ledger state: it runs on snapshots only, so
//! one set of recorded transactions can be settled any number of times.

pub mod ledger;

pub use ledger::BalanceLedger;
