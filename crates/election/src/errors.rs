use peg_primitives::EvmAddress;
use thiserror::Error;

/// Reasons an [`AuthorizationPolicy`](crate::AuthorizationPolicy) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    /// The voter set is empty.
    #[error("authorized voter set is empty")]
    EmptyVoters,

    /// The same voter was listed more than once.
    #[error("voter {0} listed more than once")]
    DuplicateVoter(EvmAddress),

    /// The required vote count can never be reached, or is zero.
    #[error("invalid quorum: {required} required votes for {voters} voters")]
    InvalidQuorum { required: usize, voters: usize },
}
