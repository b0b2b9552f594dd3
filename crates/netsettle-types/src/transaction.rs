//! The recorded-transaction model.
//!
//! A [`Transaction`] is an immutable "payer owes receiver amount" record.
//! Validation happens once at record time via [`Transaction::validate`];
//! everything downstream may assume a positive amount and non-blank names.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{NetsettleError, Participant, Result};

/// Globally unique transaction identifier. Uses UUIDv7 so journal entries
/// sort in recording order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TransactionId(pub Uuid);

impl TransactionId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx:{}", self.0)
    }
}

/// An immutable IOU record: `payer` owes `receiver` `amount`.
///
/// `payer == receiver` is permitted: the debit and credit cancel, so the
/// transaction is a no-op on net balances, but it is still journaled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub payer: Participant,
    pub receiver: Participant,
    /// Always strictly positive once validated.
    pub amount: i64,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a transaction with a fresh id and the current timestamp.
    ///
    /// Does not validate; the ledger calls [`Transaction::validate`] at
    /// record time.
    #[must_use]
    pub fn new(
        payer: impl Into<Participant>,
        receiver: impl Into<Participant>,
        amount: i64,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            payer: payer.into(),
            receiver: receiver.into(),
            amount,
            recorded_at: Utc::now(),
        }
    }

    /// Defensive contract check: positive amount, non-blank participants.
    ///
    /// # Errors
    /// - [`NetsettleError::NonPositiveAmount`] if `amount <= 0`
    /// - [`NetsettleError::BlankParticipant`] if either name trims to empty
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0 {
            return Err(NetsettleError::NonPositiveAmount {
                amount: self.amount,
            });
        }
        if self.payer.is_blank() {
            return Err(NetsettleError::BlankParticipant { role: "payer" });
        }
        if self.receiver.is_blank() {
            return Err(NetsettleError::BlankParticipant { role: "receiver" });
        }
        Ok(())
    }

    /// Whether payer and receiver are the same participant.
    #[must_use]
    pub fn is_self_transfer(&self) -> bool {
        self.payer == self.receiver
    }
}
