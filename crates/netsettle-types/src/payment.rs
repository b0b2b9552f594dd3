//! Settlement output model.
//!
//! A [`Payment`] is one "from pays amount to to" instruction; a
//! [`Settlement`] is the ordered sequence produced by one settlement run.
//! The sequence carries the zero-out invariant: applying every payment to
//! the input snapshot drives all balances to exactly zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{NetBalances, Participant, apply_payment};

/// A single settlement instruction: `from` pays `amount` to `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub from: Participant,
    pub to: Participant,
    /// Always strictly positive by construction.
    pub amount: i64,
}

impl fmt::Display for Payment {
    /// Renders the presentation-layer contract line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pays {} to {}", self.from, self.amount, self.to)
    }
}

/// The ordered payment sequence produced by one settlement run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub payments: Vec<Payment>,
}

impl Settlement {
    /// Number of payments in the run.
    #[must_use]
    pub fn payment_count(&self) -> usize {
        self.payments.len()
    }

    /// Whether the run emitted no payments (all balances already zero).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// Total amount moved across all payments.
    #[must_use]
    pub fn total_volume(&self) -> i64 {
        self.payments.iter().map(|p| p.amount).sum()
    }

    /// Apply every payment to a balance mapping, in order.
    ///
    /// Applied to the snapshot the run was computed from, this zeroes
    /// every balance.
    pub fn apply_to(&self, balances: &mut NetBalances) {
        for payment in &self.payments {
            apply_payment(balances, payment);
        }
    }
}
