//! Federation voting: who may vote, and how votes on governed calls are
//! tallied until a proposal gathers its quorum.
//!
//! The election is agnostic of what is being voted on. Bounds and
//! validation of candidate values belong to the rules that call into it.

mod election;
mod errors;
mod policy;
mod proposal;

pub use election::{Election, VoteOutcome};
pub use errors::PolicyError;
pub use policy::{AuthorizationPolicy, QuorumRule};
pub use proposal::ProposalKey;
