use peg_activation::ConsensusRule;
use peg_governance::GovernanceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Governance(#[from] GovernanceError),

    /// The call belongs to a rule that is not active at the call's height.
    #[error("{0} is not active")]
    NotActive(ConsensusRule),
}
