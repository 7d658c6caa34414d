use peg_election::{AuthorizationPolicy, ProposalKey, VoteOutcome};
use peg_primitives::EvmAddress;

use crate::storage::{BridgeStorage, ElectionKind, StorageError};

/// Casts a vote in the stored election of `kind`, writing the election back
/// unless the vote was rejected.
pub(crate) fn cast_vote<S: BridgeStorage + ?Sized>(
    storage: &mut S,
    kind: ElectionKind,
    policy: &AuthorizationPolicy,
    voter: EvmAddress,
    proposal: ProposalKey,
) -> Result<VoteOutcome, StorageError> {
    let mut election = storage.election(kind)?.unwrap_or_default();
    let outcome = election.vote(policy, voter, proposal);
    if outcome.is_accepted() {
        storage.set_election(kind, &election)?;
    }
    Ok(outcome)
}
