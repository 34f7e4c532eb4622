//! Trait interfaces for Wicket.
//!
//! [`PrizeAllocator`] is the seam between the payout engine (wicket-payout
//! implements) and the settlement component that executes the resulting
//! transfers. Settlement itself — moving funds on chain — is outside this
//! workspace.

use crate::error::PayoutError;
use crate::types::{DistributionResult, Participant};

/// Pure computation of prize distributions.
///
/// Implementations take a contest's final (unsorted) participant list and
/// the total prize pool as decimal text, and return one payout entry per
/// wallet-holding participant plus an audit-trail explanation. The call has
/// no side effects and may run concurrently for many contests.
pub trait PrizeAllocator: Send + Sync {
    /// Compute the per-participant payouts for a settled contest.
    ///
    /// Ties on score share their merged positional percentages equally.
    /// Participants without a wallet address are omitted from the payout
    /// list but noted in the explanation. An empty participant list is not
    /// an error; it yields an empty list with an explanatory message.
    fn compute_distribution(
        &self,
        participants: &[Participant],
        total_pool: &str,
    ) -> Result<DistributionResult, PayoutError>;
}
