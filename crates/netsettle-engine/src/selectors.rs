//! Extremal selection queues over mutable per-participant balances.
//!
//! Uses ordered `BTreeSet`s keyed directly on (balance, participant)
//! pairs — no index handles into a parallel list:
//! - **Creditors**: `BTreeSet<(Reverse<i64>, Participant)>` — largest
//!   balance first
//! - **Debtors**: `BTreeSet<(i64, Participant)>` — most negative first
//!
//! Tie-break: among equal balances the lexicographically smallest
//! participant pops first, so settlement output is fully deterministic.
//! Pop and push are O(log n).

use std::cmp::Reverse;
use std::collections::BTreeSet;

use netsettle_types::Participant;

/// Max-selector over positive balances: pops the most-owed creditor.
#[derive(Debug, Default)]
pub struct CreditorQueue {
    entries: BTreeSet<(Reverse<i64>, Participant)>,
}

impl CreditorQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a creditor with its current balance.
    ///
    /// Callers only push strictly positive balances; a participant whose
    /// residual reaches zero is simply not re-inserted.
    pub fn push(&mut self, participant: Participant, balance: i64) {
        debug_assert!(balance > 0, "creditor balance must be positive");
        self.entries.insert((Reverse(balance), participant));
    }

    /// Remove and return the creditor with the largest balance.
    pub fn pop(&mut self) -> Option<(Participant, i64)> {
        self.entries
            .pop_first()
            .map(|(Reverse(balance), participant)| (participant, balance))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Min-selector over negative balances: pops the most-indebted debtor.
#[derive(Debug, Default)]
pub struct DebtorQueue {
    entries: BTreeSet<(i64, Participant)>,
}

impl DebtorQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a debtor with its current (negative) balance.
    pub fn push(&mut self, participant: Participant, balance: i64) {
        debug_assert!(balance < 0, "debtor balance must be negative");
        self.entries.insert((balance, participant));
    }

    /// Remove and return the debtor with the largest debt magnitude.
    /// The returned balance is negative.
    pub fn pop(&mut self) -> Option<(Participant, i64)> {
        self.entries
            .pop_first()
            .map(|(balance, participant)| (participant, balance))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
