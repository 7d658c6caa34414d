use bitcoin::Amount;
use peg_election::{AuthorizationPolicy, Election, VoteOutcome};
use peg_params::{BridgeParams, ParamsError};
use peg_primitives::CallContext;
use tracing::*;

use crate::{
    errors::GovernanceError,
    proposals::locking_cap_proposal,
    storage::{BridgeStorage, ElectionKind},
    vote::cast_vote,
};

/// Governs the locking cap, the most value that may be pegged in.
///
/// The cap starts at a configured value and can only be raised, by at most
/// a configured multiple of the current cap per resolved vote.
#[derive(Clone, Debug)]
pub struct LockingCapRule {
    policy: AuthorizationPolicy,
    initial_locking_cap: Amount,
    increments_multiplier: u64,
}

impl LockingCapRule {
    pub fn new(
        policy: AuthorizationPolicy,
        initial_locking_cap: Amount,
        increments_multiplier: u64,
    ) -> Self {
        Self {
            policy,
            initial_locking_cap,
            increments_multiplier,
        }
    }

    pub fn from_params(params: &BridgeParams) -> Result<Self, ParamsError> {
        Ok(Self::new(
            params.locking_cap_policy()?,
            params.initial_locking_cap,
            params.locking_cap_increments_multiplier,
        ))
    }

    pub fn policy(&self) -> &AuthorizationPolicy {
        &self.policy
    }

    /// Current locking cap, initializing storage with the configured initial
    /// cap the first time it is read.
    pub fn read_locking_cap<S: BridgeStorage + ?Sized>(
        &self,
        storage: &mut S,
    ) -> Result<Amount, GovernanceError> {
        if let Some(cap) = storage.locking_cap()? {
            return Ok(cap);
        }

        storage.set_locking_cap(self.initial_locking_cap)?;
        info!(cap = %self.initial_locking_cap, "initialized locking cap");
        Ok(self.initial_locking_cap)
    }

    /// Largest cap a vote may propose when the cap is `current`, or `None`
    /// if the bound overflows.
    pub fn max_increase(&self, current: Amount) -> Option<Amount> {
        current.checked_mul(self.increments_multiplier)
    }

    /// Votes for raising the locking cap to `candidate`.
    ///
    /// Returns whether the vote was cast. Candidates below the current cap
    /// or above its allowed increase are rejected without a vote.
    pub fn vote_increase<S: BridgeStorage + ?Sized>(
        &self,
        storage: &mut S,
        ctx: &CallContext,
        candidate: Amount,
    ) -> Result<bool, GovernanceError> {
        let voter = ctx.sender();
        if !self.policy.is_caller_authorized(ctx) {
            debug!(%voter, %candidate, "locking cap vote from unauthorized caller");
            return Ok(false);
        }

        let current = self.read_locking_cap(storage)?;
        if candidate < current {
            debug!(%voter, %candidate, %current, "rejecting locking cap decrease");
            return Ok(false);
        }
        if let Some(max) = self.max_increase(current).filter(|max| candidate > *max) {
            debug!(%voter, %candidate, %max, "rejecting locking cap increase above bound");
            return Ok(false);
        }

        let proposal = locking_cap_proposal(candidate);
        match cast_vote(storage, ElectionKind::LockingCap, &self.policy, voter, proposal)? {
            VoteOutcome::Rejected => return Ok(false),
            VoteOutcome::Recorded => {}
            VoteOutcome::Resolved(_) => {
                storage.set_locking_cap(candidate)?;
                info!(
                    from = %current,
                    to = %candidate,
                    height = ctx.height(),
                    "locking cap raised"
                );
            }
        }

        Ok(true)
    }

    /// Pending locking cap votes.
    pub fn election<S: BridgeStorage + ?Sized>(
        &self,
        storage: &S,
    ) -> Result<Election, GovernanceError> {
        Ok(storage.election(ElectionKind::LockingCap)?.unwrap_or_default())
    }
}
