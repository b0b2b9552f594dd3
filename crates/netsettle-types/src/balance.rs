//! Net-balance mapping and helpers.
//!
//! A net balance is the signed sum of everything owed to (positive) or by
//! (negative) a participant. The conservation invariant — every debit is
//! matched by an equal credit — means the values of a well-formed mapping
//! always sum to exactly zero.

use std::collections::BTreeMap;

use crate::{Participant, Payment};

/// Mapping from participant to signed net balance.
///
/// `BTreeMap` so iteration (and therefore settlement partitioning) is
/// deterministic in participant order.
pub type NetBalances = BTreeMap<Participant, i64>;

/// Sum of all net balances. Zero for any mapping built from transactions.
#[must_use]
pub fn net_sum(balances: &NetBalances) -> i64 {
    balances.values().sum()
}

/// Apply one payment: `from` discharges debt (balance rises toward zero),
/// `to` is paid off (balance falls toward zero).
///
/// Entries default to 0 on first reference.
pub fn apply_payment(balances: &mut NetBalances, payment: &Payment) {
    *balances.entry(payment.from.clone()).or_insert(0) += payment.amount;
    *balances.entry(payment.to.clone()).or_insert(0) -= payment.amount;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mapping_sums_to_zero() {
        assert_eq!(net_sum(&NetBalances::new()), 0);
    }

    #[test]
    fn apply_payment_preserves_sum() {
        let mut balances = NetBalances::new();
        balances.insert(Participant::from("A"), -40);
        balances.insert(Participant::from("B"), 40);

        apply_payment(
            &mut balances,
            &Payment {
                from: Participant::from("A"),
                to: Participant::from("B"),
                amount: 40,
            },
        );
        assert_eq!(net_sum(&balances), 0);
        assert_eq!(balances[&Participant::from("A")], 0);
        assert_eq!(balances[&Participant::from("B")], 0);
    }

    #[test]
    fn apply_payment_creates_missing_entries() {
        let mut balances = NetBalances::new();
        apply_payment(
            &mut balances,
            &Payment {
                from: Participant::from("X"),
                to: Participant::from("Y"),
                amount: 10,
            },
        );
        assert_eq!(balances[&Participant::from("X")], 10);
        assert_eq!(balances[&Participant::from("Y")], -10);
        assert_eq!(net_sum(&balances), 0);
    }
}
