use bitcoin::SignedAmount;
use peg_election::{AuthorizationPolicy, Election, VoteOutcome};
use peg_params::{BridgeParams, ParamsError};
use peg_primitives::CallContext;
use tracing::*;

use crate::{
    errors::GovernanceError,
    proposals::fee_per_kb_proposal,
    storage::{BridgeStorage, ElectionKind},
    vote::cast_vote,
};

/// Result of a fee-per-kb vote, as reported to the caller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeeVoteStatus {
    /// The caller may not vote on the fee.
    Unauthorized,

    /// The candidate fee is zero or negative.
    NonPositive,

    /// The candidate fee is above the configured maximum.
    ExceedsMaximum,

    /// The vote was cast. The status is the same whether or not it
    /// completed a quorum.
    Accepted,
}

impl FeeVoteStatus {
    /// Status code returned by the contract call.
    pub const fn code(&self) -> i32 {
        match self {
            FeeVoteStatus::Unauthorized => -10,
            FeeVoteStatus::NonPositive => -1,
            FeeVoteStatus::ExceedsMaximum => -2,
            FeeVoteStatus::Accepted => 1,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, FeeVoteStatus::Accepted)
    }
}

/// Governs the fee per kb charged on peg-outs.
#[derive(Clone, Debug)]
pub struct FeePerKbRule {
    policy: AuthorizationPolicy,
    max_fee_per_kb: SignedAmount,
    genesis_fee_per_kb: SignedAmount,
}

impl FeePerKbRule {
    pub fn new(
        policy: AuthorizationPolicy,
        max_fee_per_kb: SignedAmount,
        genesis_fee_per_kb: SignedAmount,
    ) -> Self {
        Self {
            policy,
            max_fee_per_kb,
            genesis_fee_per_kb,
        }
    }

    pub fn from_params(params: &BridgeParams) -> Result<Self, ParamsError> {
        Ok(Self::new(
            params.fee_per_kb_policy()?,
            params.max_fee_per_kb,
            params.genesis_fee_per_kb,
        ))
    }

    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    pub fn max_fee_per_kb(&self) -> SignedAmount {
        self.max_fee_per_kb
    }

    /// Votes for changing the fee per kb to `candidate`.
    ///
    /// The fee is written to storage only by the vote that completes a
    /// quorum.
    ///
    /// # Errors
    ///
    /// Returns `GovernanceError::MissingCandidate` if `candidate` is absent,
    /// before any other check. Storage failures are propagated.
    pub fn vote_fee_change<S: BridgeStorage + ?Sized>(
        &self,
        storage: &mut S,
        ctx: &CallContext,
        candidate: Option<SignedAmount>,
    ) -> Result<FeeVoteStatus, GovernanceError> {
        let fee = candidate.ok_or(GovernanceError::MissingCandidate)?;
        let voter = ctx.sender();

        if !self.policy.is_caller_authorized(ctx) {
            debug!(%voter, %fee, "fee vote from unauthorized caller");
            return Ok(FeeVoteStatus::Unauthorized);
        }
        if !fee.is_positive() {
            debug!(%voter, %fee, "rejecting non-positive fee");
            return Ok(FeeVoteStatus::NonPositive);
        }
        if fee > self.max_fee_per_kb {
            debug!(%voter, %fee, max = %self.max_fee_per_kb, "rejecting fee above maximum");
            return Ok(FeeVoteStatus::ExceedsMaximum);
        }

        let proposal = fee_per_kb_proposal(fee);
        match cast_vote(storage, ElectionKind::FeePerKb, &self.policy, voter, proposal)? {
            VoteOutcome::Rejected => return Ok(FeeVoteStatus::Unauthorized),
            VoteOutcome::Recorded => {}
            VoteOutcome::Resolved(_) => {
                storage.set_fee_per_kb(fee)?;
                info!(%fee, height = ctx.height(), "fee per kb changed");
            }
        }

        Ok(FeeVoteStatus::Accepted)
    }

    /// Fee per kb in effect. Falls back to the genesis fee without storing
    /// it.
    pub fn fee_per_kb<S: BridgeStorage + ?Sized>(
        &self,
        storage: &S,
    ) -> Result<SignedAmount, GovernanceError> {
        Ok(storage.fee_per_kb()?.unwrap_or(self.genesis_fee_per_kb))
    }

    /// Pending fee votes.
    pub fn election<S: BridgeStorage + ?Sized>(
        &self,
        storage: &S,
    ) -> Result<Election, GovernanceError> {
        Ok(storage.election(ElectionKind::FeePerKb)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;
    use peg_params::test_utils::{gen_params, voter};
    use peg_primitives::EvmAddress;

    use super::*;
    use crate::storage::{InMemoryBridgeStorage, MockBridgeStorage, StorageError};

    fn rule() -> FeePerKbRule {
        FeePerKbRule::from_params(&gen_params()).unwrap()
    }

    fn ctx(n: u8) -> CallContext {
        CallContext::new(voter(n), 10)
    }

    fn sats(n: i64) -> SignedAmount {
        SignedAmount::from_sat(n)
    }

    /// Storage that must not be touched at all.
    fn untouched_storage() -> MockBridgeStorage {
        let mut storage = MockBridgeStorage::new();
        storage.expect_election().never();
        storage.expect_set_election().never();
        storage.expect_set_fee_per_kb().never();
        storage
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(FeeVoteStatus::Unauthorized.code(), -10);
        assert_eq!(FeeVoteStatus::NonPositive.code(), -1);
        assert_eq!(FeeVoteStatus::ExceedsMaximum.code(), -2);
        assert_eq!(FeeVoteStatus::Accepted.code(), 1);
    }

    #[test]
    fn test_missing_candidate_is_a_fault() {
        let mut storage = untouched_storage();

        // Even for an unauthorized caller.
        let stranger = CallContext::new(EvmAddress::repeat_byte(0x43), 10);
        let res = rule().vote_fee_change(&mut storage, &stranger, None);
        assert!(matches!(res, Err(GovernanceError::MissingCandidate)));
    }

    #[test]
    fn test_rejections_cast_no_vote() {
        let rule = rule();
        let mut storage = untouched_storage();

        let stranger = CallContext::new(EvmAddress::repeat_byte(0x43), 10);
        let status = rule.vote_fee_change(&mut storage, &stranger, Some(sats(1_000))).unwrap();
        assert_eq!(status, FeeVoteStatus::Unauthorized);

        for fee in [sats(0), sats(-1)] {
            let status = rule.vote_fee_change(&mut storage, &ctx(1), Some(fee)).unwrap();
            assert_eq!(status, FeeVoteStatus::NonPositive);
        }

        let over = rule.max_fee_per_kb() + sats(1);
        let status = rule.vote_fee_change(&mut storage, &ctx(1), Some(over)).unwrap();
        assert_eq!(status, FeeVoteStatus::ExceedsMaximum);
    }

    #[test]
    fn test_maximum_is_inclusive() {
        let rule = rule();
        let mut storage = InMemoryBridgeStorage::new();

        let max = rule.max_fee_per_kb();
        let status = rule.vote_fee_change(&mut storage, &ctx(1), Some(max)).unwrap();
        assert_eq!(status, FeeVoteStatus::Accepted);
    }

    #[test]
    fn test_vote_without_quorum_does_not_set_fee() {
        let mut storage = MockBridgeStorage::new();
        storage
            .expect_election()
            .with(eq(ElectionKind::FeePerKb))
            .times(1)
            .returning(|_| Ok(None));
        storage
            .expect_set_election()
            .withf(|kind, election| *kind == ElectionKind::FeePerKb && !election.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));
        storage.expect_set_fee_per_kb().never();

        let status = rule().vote_fee_change(&mut storage, &ctx(1), Some(sats(100))).unwrap();
        assert_eq!(status, FeeVoteStatus::Accepted);
    }

    #[test]
    fn test_quorum_sets_fee_once() {
        let rule = rule();
        let mut prior = Election::new();
        prior.vote(rule.policy(), voter(1), fee_per_kb_proposal(sats(100)));

        let mut storage = MockBridgeStorage::new();
        storage
            .expect_election()
            .times(1)
            .returning(move |_| Ok(Some(prior.clone())));
        storage
            .expect_set_election()
            .withf(|_, election| election.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));
        storage
            .expect_set_fee_per_kb()
            .with(eq(sats(100)))
            .times(1)
            .returning(|_| Ok(()));

        let status = rule.vote_fee_change(&mut storage, &ctx(2), Some(sats(100))).unwrap();
        assert_eq!(status, FeeVoteStatus::Accepted);
    }

    #[test]
    fn test_storage_failure_propagates() {
        let mut storage = MockBridgeStorage::new();
        storage
            .expect_election()
            .returning(|_| Err(StorageError::database("unavailable")));

        let res = rule().vote_fee_change(&mut storage, &ctx(1), Some(sats(100)));
        assert!(matches!(res, Err(GovernanceError::Storage(StorageError::Database(_)))));
    }

    #[test]
    fn test_three_voter_rounds() {
        let rule = rule();
        let mut storage = InMemoryBridgeStorage::new();
        let genesis = gen_params().genesis_fee_per_kb;

        let status = rule.vote_fee_change(&mut storage, &ctx(1), Some(sats(100))).unwrap();
        assert_eq!(status.code(), 1);
        assert_eq!(rule.fee_per_kb(&storage).unwrap(), genesis);

        let status = rule.vote_fee_change(&mut storage, &ctx(2), Some(sats(100))).unwrap();
        assert_eq!(status.code(), 1);
        assert_eq!(rule.fee_per_kb(&storage).unwrap(), sats(100));
        assert!(rule.election(&storage).unwrap().is_empty());

        // A fresh round: one backer is not a quorum.
        let status = rule.vote_fee_change(&mut storage, &ctx(3), Some(sats(100))).unwrap();
        assert_eq!(status.code(), 1);
        let election = rule.election(&storage).unwrap();
        assert_eq!(election.backer_count(&fee_per_kb_proposal(sats(100))), 1);
        assert_eq!(election.proposal_of(&voter(3)), Some(&fee_per_kb_proposal(sats(100))));
    }

    #[test]
    fn test_genesis_fee_not_persisted_on_read() {
        let mut storage = MockBridgeStorage::new();
        storage.expect_fee_per_kb().times(2).returning(|| Ok(None));
        storage.expect_set_fee_per_kb().never();

        let rule = rule();
        let genesis = gen_params().genesis_fee_per_kb;
        assert_eq!(rule.fee_per_kb(&storage).unwrap(), genesis);
        assert_eq!(rule.fee_per_kb(&storage).unwrap(), genesis);
    }
}
