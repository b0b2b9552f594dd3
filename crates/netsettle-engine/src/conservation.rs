//! Conservation invariant checker.
//!
//! Invariant checked before every settlement run:
//! ```text
//! Σ net balance == 0
//! ```
//!
//! Any mapping built from transactions satisfies this by construction
//! (every debit has an equal credit). A mapping that fails it was
//! assembled by hand with a bug, and the greedy loop would strand one
//! side — so the engine fails fast instead of looping incorrectly.

use netsettle_types::{NetBalances, NetsettleError, Result, net_sum};
use tracing::error;

/// Verify that a balance snapshot sums to exactly zero.
///
/// # Errors
/// Returns [`NetsettleError::UnbalancedSnapshot`] with the offending sum.
pub fn verify_zero_sum(balances: &NetBalances) -> Result<()> {
    let sum = net_sum(balances);
    if sum != 0 {
        error!(sum, "balance snapshot violates conservation invariant");
        return Err(NetsettleError::UnbalancedSnapshot { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use netsettle_types::Participant;

    use super::*;

    #[test]
    fn empty_snapshot_is_balanced() {
        assert!(verify_zero_sum(&NetBalances::new()).is_ok());
    }

    #[test]
    fn balanced_snapshot_passes() {
        let mut balances = NetBalances::new();
        balances.insert(Participant::from("A"), -150);
        balances.insert(Participant::from("B"), 0);
        balances.insert(Participant::from("C"), 150);
        assert!(verify_zero_sum(&balances).is_ok());
    }

    #[test]
    fn unbalanced_snapshot_fails_with_sum() {
        let mut balances = NetBalances::new();
        balances.insert(Participant::from("A"), -100);
        balances.insert(Participant::from("B"), 107);

        let err = verify_zero_sum(&balances).unwrap_err();
        assert!(matches!(err, NetsettleError::UnbalancedSnapshot { sum: 7 }));
    }
}
