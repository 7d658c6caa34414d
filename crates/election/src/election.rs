use std::{
    collections::{BTreeMap, BTreeSet},
    io,
};

use borsh::{BorshDeserialize, BorshSerialize};
use peg_primitives::EvmAddress;
use tracing::*;

use crate::{policy::AuthorizationPolicy, proposal::ProposalKey};

/// Result of casting a vote.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VoteOutcome {
    /// The voter is not authorized. Nothing changed.
    Rejected,

    /// The vote counts towards its proposal, which has not reached quorum.
    Recorded,

    /// The vote completed the quorum of this proposal. The caller must
    /// apply it; the election has already been emptied.
    Resolved(ProposalKey),
}

impl VoteOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, VoteOutcome::Rejected)
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, VoteOutcome::Resolved(_))
    }

    pub fn winner(&self) -> Option<&ProposalKey> {
        match self {
            VoteOutcome::Resolved(key) => Some(key),
            _ => None,
        }
    }
}

/// Tally of the votes currently backing each proposal.
///
/// A voter backs at most one proposal at a time. Voting for a different
/// proposal moves the vote. As soon as any proposal reaches the policy's
/// quorum, the whole election is cleared, including proposals that were
/// still gathering votes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Election {
    votes: BTreeMap<ProposalKey, BTreeSet<EvmAddress>>,
}

impl Election {
    pub fn new() -> Self {
        Self::default()
    }

    /// Casts `voter`'s vote for `proposal` under `policy`.
    pub fn vote(
        &mut self,
        policy: &AuthorizationPolicy,
        voter: EvmAddress,
        proposal: ProposalKey,
    ) -> VoteOutcome {
        if !policy.is_authorized(&voter) {
            debug!(%voter, %proposal, "rejecting vote from unauthorized voter");
            return VoteOutcome::Rejected;
        }

        match self.proposal_of(&voter).cloned() {
            Some(current) if current == proposal => {
                trace!(%voter, %proposal, "voter already backs proposal");
                return VoteOutcome::Recorded;
            }
            Some(previous) => {
                debug!(%voter, from = %previous, to = %proposal, "moving vote");
                self.withdraw(&previous, &voter);
            }
            None => {}
        }

        let backers = self.votes.entry(proposal.clone()).or_default();
        backers.insert(voter);
        let count = backers.len();

        if count >= policy.required_votes() {
            info!(
                %proposal,
                backers = count,
                required = policy.required_votes(),
                "proposal reached quorum"
            );
            self.clear();
            return VoteOutcome::Resolved(proposal);
        }

        debug!(
            %voter,
            %proposal,
            backers = count,
            required = policy.required_votes(),
            "vote recorded"
        );
        VoteOutcome::Recorded
    }

    fn withdraw(&mut self, proposal: &ProposalKey, voter: &EvmAddress) {
        if let Some(backers) = self.votes.get_mut(proposal) {
            backers.remove(voter);
            if backers.is_empty() {
                self.votes.remove(proposal);
            }
        }
    }

    /// The proposal `voter` currently backs, if any.
    pub fn proposal_of(&self, voter: &EvmAddress) -> Option<&ProposalKey> {
        self.votes
            .iter()
            .find(|(_, backers)| backers.contains(voter))
            .map(|(key, _)| key)
    }

    pub fn backers(&self, proposal: &ProposalKey) -> Option<&BTreeSet<EvmAddress>> {
        self.votes.get(proposal)
    }

    pub fn backer_count(&self, proposal: &ProposalKey) -> usize {
        self.votes.get(proposal).map_or(0, BTreeSet::len)
    }

    /// Proposals with at least one backer, in key order.
    pub fn proposals(&self) -> impl Iterator<Item = (&ProposalKey, &BTreeSet<EvmAddress>)> {
        self.votes.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }

    pub fn clear(&mut self) {
        self.votes.clear();
    }
}

type RawVotes = BTreeMap<ProposalKey, BTreeSet<[u8; 20]>>;

impl BorshSerialize for Election {
    fn serialize<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        let raw: RawVotes = self
            .votes
            .iter()
            .map(|(key, backers)| (key.clone(), backers.iter().map(|a| (*a).into()).collect()))
            .collect();
        raw.serialize(writer)
    }
}

impl BorshDeserialize for Election {
    fn deserialize_reader<R: io::Read>(reader: &mut R) -> io::Result<Self> {
        let raw = RawVotes::deserialize_reader(reader)?;
        let mut votes = BTreeMap::new();
        for (key, backers) in raw {
            if backers.is_empty() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("proposal {key} stored without backers"),
                ));
            }
            votes.insert(key, backers.into_iter().map(EvmAddress::from).collect());
        }

        let election = Self { votes };
        let total: usize = election.votes.values().map(BTreeSet::len).sum();
        let distinct: BTreeSet<_> = election.votes.values().flatten().collect();
        if distinct.len() != total {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "voter backs more than one proposal",
            ));
        }
        Ok(election)
    }
}
