//! The balance ledger.
//!
//! Folds validated transactions into signed net balances:
//! `balance[payer] -= amount; balance[receiver] += amount`.
//! Because every debit is matched by an equal credit, the values always
//! sum to exactly zero (conservation invariant).

use std::collections::HashMap;

use netsettle_types::{NetBalances, Participant, Result, Transaction, TransactionId};
use tracing::debug;

/// Accumulates net balances from a stream of recorded transactions.
///
/// The ledger exclusively owns its live map; `record` takes `&mut self`,
/// so a concurrent host gets mutual exclusion from the borrow checker
/// (or wraps the ledger in its own lock).
#[derive(Debug, Default)]
pub struct BalanceLedger {
    /// Live per-participant net balances.
    balances: HashMap<Participant, i64>,
    /// Append-only journal of every accepted transaction.
    journal: Vec<Transaction>,
}

impl BalanceLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record one transaction.
    ///
    /// Debits the payer and credits the receiver, creating entries
    /// initialized to 0 on first reference. A self-transfer (payer ==
    /// receiver) is accepted and journaled; its debit and credit cancel,
    /// leaving balances untouched.
    ///
    /// # Errors
    /// - [`NetsettleError::NonPositiveAmount`] if `amount <= 0`
    /// - [`NetsettleError::BlankParticipant`] if either name is blank
    ///
    /// [`NetsettleError::NonPositiveAmount`]: netsettle_types::NetsettleError::NonPositiveAmount
    /// [`NetsettleError::BlankParticipant`]: netsettle_types::NetsettleError::BlankParticipant
    pub fn record(&mut self, tx: Transaction) -> Result<TransactionId> {
        tx.validate()?;

        *self.balances.entry(tx.payer.clone()).or_insert(0) -= tx.amount;
        *self.balances.entry(tx.receiver.clone()).or_insert(0) += tx.amount;

        debug!(
            id = %tx.id,
            payer = %tx.payer,
            receiver = %tx.receiver,
            amount = tx.amount,
            "transaction recorded"
        );

        let id = tx.id;
        self.journal.push(tx);
        Ok(id)
    }

    /// Take an independent, owned copy of the current net balances.
    ///
    /// Pure and idempotent: two snapshots with no intervening `record`
    /// are identical. Settlement operates only on snapshots, never on
    /// the live map.
    #[must_use]
    pub fn snapshot(&self) -> NetBalances {
        self.balances
            .iter()
            .map(|(p, &b)| (p.clone(), b))
            .collect()
    }

    /// Current net balance for one participant (0 if never referenced).
    #[must_use]
    pub fn balance(&self, participant: &Participant) -> i64 {
        self.balances.get(participant).copied().unwrap_or(0)
    }

    /// All accepted transactions, in recording order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.journal
    }

    /// Number of accepted transactions.
    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.journal.len()
    }

    /// Number of participants referenced so far (including fully settled
    /// ones whose balance is back to zero).
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.balances.len()
    }

    /// Whether no transaction has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.journal.is_empty()
    }
}
