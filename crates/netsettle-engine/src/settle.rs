//! Pure greedy settlement.
//!
//! The only function this crate exposes to callers: takes a net-balance
//! snapshot, produces the payment sequence that zeroes it. No side
//! effects, no state between runs.

use netsettle_types::{NetBalances, Payment, Result, Settlement};
use tracing::trace;

use crate::conservation::verify_zero_sum;
use crate::selectors::{CreditorQueue, DebtorQueue};

/// Settle a balance snapshot into an ordered payment sequence.
///
/// ## Algorithm
///
/// 1. Verify the conservation precondition (Σ balances == 0)
/// 2. Partition non-zero balances into creditor and debtor queues;
///    zero balances are already settled and are skipped
/// 3. Loop while both queues are non-empty:
///    pop the largest creditor `c` and the most-indebted debtor `d`,
///    move `min(balance[c], -balance[d])` from `d` to `c`, and re-insert
///    whichever side still has a non-zero residual
/// 4. Both queues drain simultaneously (creditor surplus equals debtor
///    deficit in magnitude), leaving every balance exactly zero
///
/// At least one side zeroes out per iteration, so the run emits at most
/// n−1 payments for n non-zero balances and completes in O(n log n).
///
/// ## Determinism
///
/// Among equal extremal balances the lexicographically smallest
/// participant is matched first, so the same snapshot always produces the
/// same payment sequence.
///
/// # Errors
/// Returns [`NetsettleError::UnbalancedSnapshot`] if the snapshot does
/// not sum to zero — a caller contract violation, unreachable through
/// ledger snapshots.
///
/// [`NetsettleError::UnbalancedSnapshot`]: netsettle_types::NetsettleError::UnbalancedSnapshot
pub fn settle(balances: &NetBalances) -> Result<Settlement> {
    verify_zero_sum(balances)?;

    let mut creditors = CreditorQueue::new();
    let mut debtors = DebtorQueue::new();
    for (participant, &balance) in balances {
        if balance > 0 {
            creditors.push(participant.clone(), balance);
        } else if balance < 0 {
            debtors.push(participant.clone(), balance);
        }
    }

    let mut payments = Vec::new();
    while let (Some((creditor, owed)), Some((debtor, owing))) =
        (creditors.pop(), debtors.pop())
    {
        let amount = owed.min(-owing);
        trace!(from = %debtor, to = %creditor, amount, "payment emitted");
        payments.push(Payment {
            from: debtor.clone(),
            to: creditor.clone(),
            amount,
        });

        // min() guarantees at least one residual is exactly zero.
        let creditor_residual = owed - amount;
        if creditor_residual > 0 {
            creditors.push(creditor, creditor_residual);
        }
        let debtor_residual = owing + amount;
        if debtor_residual < 0 {
            debtors.push(debtor, debtor_residual);
        }
    }

    // Conservation means neither side can outlast the other.
    debug_assert!(creditors.is_empty() && debtors.is_empty());

    Ok(Settlement { payments })
}

#[cfg(test)]
mod tests {
    use netsettle_types::{NetsettleError, Participant, net_sum};

    use super::*;

    fn balances(entries: &[(&str, i64)]) -> NetBalances {
        entries
            .iter()
            .map(|&(name, b)| (Participant::from(name), b))
            .collect()
    }

    #[test]
    fn empty_snapshot_settles_to_nothing() {
        let settlement = settle(&NetBalances::new()).unwrap();
        assert!(settlement.is_empty());
    }

    #[test]
    fn all_zero_snapshot_settles_to_nothing() {
        let settlement = settle(&balances(&[("A", 0), ("B", 0)])).unwrap();
        assert!(settlement.is_empty());
    }

    #[test]
    fn single_pair_settles_in_one_payment() {
        let settlement = settle(&balances(&[("A", -100), ("B", 100)])).unwrap();
        assert_eq!(
            settlement.payments,
            vec![Payment {
                from: Participant::from("A"),
                to: Participant::from("B"),
                amount: 100,
            }]
        );
    }

    #[test]
    fn zero_balances_are_skipped() {
        let snapshot = balances(&[("A", -150), ("B", 0), ("C", 150)]);
        let settlement = settle(&snapshot).unwrap();
        assert_eq!(settlement.payment_count(), 1);
        assert_eq!(settlement.payments[0].from, Participant::from("A"));
        assert_eq!(settlement.payments[0].to, Participant::from("C"));
        assert_eq!(settlement.payments[0].amount, 150);
    }

    #[test]
    fn exact_zero_out_when_extremes_match() {
        // Creditor and debtor magnitudes equal: both drop in one step.
        let snapshot = balances(&[("A", -70), ("B", 70), ("C", -30), ("D", 30)]);
        let settlement = settle(&snapshot).unwrap();
        assert_eq!(settlement.payment_count(), 2);

        let mut residual = snapshot;
        settlement.apply_to(&mut residual);
        assert!(residual.values().all(|&b| b == 0));
    }

    #[test]
    fn residual_creditor_is_reinserted() {
        // C owes 100 total but the largest creditor only absorbs 60.
        let snapshot = balances(&[("A", 60), ("B", 40), ("C", -100)]);
        let settlement = settle(&snapshot).unwrap();
        assert_eq!(
            settlement.payments,
            vec![
                Payment {
                    from: Participant::from("C"),
                    to: Participant::from("A"),
                    amount: 60,
                },
                Payment {
                    from: Participant::from("C"),
                    to: Participant::from("B"),
                    amount: 40,
                },
            ]
        );
    }

    #[test]
    fn payment_count_is_bounded() {
        let snapshot = balances(&[("A", -10), ("B", -20), ("C", -30), ("D", 25), ("E", 35)]);
        let nonzero = snapshot.values().filter(|&&b| b != 0).count();
        let settlement = settle(&snapshot).unwrap();
        assert!(settlement.payment_count() <= nonzero - 1);
    }

    #[test]
    fn deterministic_output_for_tied_balances() {
        let snapshot = balances(&[("Zoe", 50), ("Amy", 50), ("Bob", -100)]);
        let first = settle(&snapshot).unwrap();
        let second = settle(&snapshot).unwrap();
        assert_eq!(first, second);
        // Lexicographic tie-break: Amy is paid before Zoe.
        assert_eq!(first.payments[0].to, Participant::from("Amy"));
        assert_eq!(first.payments[1].to, Participant::from("Zoe"));
    }

    #[test]
    fn unbalanced_snapshot_fails_fast() {
        let err = settle(&balances(&[("A", -100), ("B", 101)])).unwrap_err();
        assert!(matches!(err, NetsettleError::UnbalancedSnapshot { sum: 1 }));
    }

    #[test]
    fn every_emitted_amount_is_positive() {
        let snapshot = balances(&[("A", -5), ("B", -95), ("C", 17), ("D", 83)]);
        let settlement = settle(&snapshot).unwrap();
        assert!(settlement.payments.iter().all(|p| p.amount > 0));
        assert_eq!(net_sum(&snapshot), 0);
    }
}
