//! Federation-governed bridge parameters.
//!
//! Each governed value has a thin rule object that validates candidates,
//! casts votes through an [`Election`](peg_election::Election) and applies
//! the winner. All state lives in the [`BridgeStorage`] collaborator and is
//! read and written on every call.

mod errors;
mod fee;
mod locking_cap;
mod proposals;
mod storage;
mod vote;

pub use errors::GovernanceError;
pub use fee::{FeePerKbRule, FeeVoteStatus};
pub use locking_cap::LockingCapRule;
pub use proposals::{
    INCREASE_LOCKING_CAP, VOTE_FEE_PER_KB_CHANGE, fee_per_kb_proposal, locking_cap_proposal,
};
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockBridgeStorage;
pub use storage::{BridgeStorage, ElectionKind, InMemoryBridgeStorage, StorageError};
