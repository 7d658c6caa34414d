use std::{collections::BTreeSet, num::NonZero};

use peg_primitives::{CallContext, EvmAddress};
use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// How the number of required votes is derived from the voter set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuorumRule {
    /// A single authorized vote is enough.
    One,
    /// Strictly more than half of the voters.
    Majority,
    /// Every voter.
    All,
    /// An explicit count, independent of the voter set size.
    Fixed(usize),
}

impl QuorumRule {
    /// Number of votes this rule requires from `voters` voters.
    pub fn required_votes(&self, voters: usize) -> usize {
        match self {
            QuorumRule::One => 1,
            QuorumRule::Majority => voters / 2 + 1,
            QuorumRule::All => voters,
            QuorumRule::Fixed(n) => *n,
        }
    }
}

/// Fixed set of identities allowed to vote on a governed call, plus the
/// number of distinct backers a proposal needs to win.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizationPolicy {
    voters: BTreeSet<EvmAddress>,
    required_votes: NonZero<usize>,
}

impl AuthorizationPolicy {
    /// Creates a policy requiring `required_votes` distinct backers.
    ///
    /// # Errors
    ///
    /// Returns `PolicyError` if:
    /// - `EmptyVoters`: no voters were given
    /// - `DuplicateVoter`: a voter is listed twice
    /// - `InvalidQuorum`: `required_votes` is zero or exceeds the voter count
    pub fn try_new(
        voters: impl IntoIterator<Item = EvmAddress>,
        required_votes: usize,
    ) -> Result<Self, PolicyError> {
        let mut set = BTreeSet::new();
        for voter in voters {
            if !set.insert(voter) {
                return Err(PolicyError::DuplicateVoter(voter));
            }
        }

        if set.is_empty() {
            return Err(PolicyError::EmptyVoters);
        }

        let invalid = PolicyError::InvalidQuorum {
            required: required_votes,
            voters: set.len(),
        };
        if required_votes > set.len() {
            return Err(invalid);
        }
        let required_votes = NonZero::new(required_votes).ok_or(invalid)?;

        Ok(Self {
            voters: set,
            required_votes,
        })
    }

    /// Creates a policy whose quorum is derived from the voter set by `rule`.
    pub fn from_rule(voters: Vec<EvmAddress>, rule: QuorumRule) -> Result<Self, PolicyError> {
        let required = rule.required_votes(voters.len());
        Self::try_new(voters, required)
    }

    pub fn is_authorized(&self, voter: &EvmAddress) -> bool {
        self.voters.contains(voter)
    }

    /// Same as [`Self::is_authorized`] for the sender of a call.
    pub fn is_caller_authorized(&self, ctx: &CallContext) -> bool {
        self.is_authorized(&ctx.sender())
    }

    pub fn required_votes(&self) -> usize {
        self.required_votes.get()
    }

    /// Authorized voters in ascending address order.
    pub fn voters(&self) -> impl Iterator<Item = &EvmAddress> {
        self.voters.iter()
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}
