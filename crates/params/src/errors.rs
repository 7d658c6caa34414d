use bitcoin::SignedAmount;
use peg_election::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("malformed params: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid {name} authorizer: {source}")]
    Authorizer {
        name: &'static str,
        #[source]
        source: PolicyError,
    },

    #[error("locking cap increments multiplier must be at least 1")]
    ZeroMultiplier,

    #[error("max fee per kb must be positive, got {0}")]
    NonPositiveMaxFee(SignedAmount),

    #[error("genesis fee per kb must be positive, got {0}")]
    NonPositiveGenesisFee(SignedAmount),

    #[error("genesis fee per kb {genesis} exceeds maximum {max}")]
    GenesisFeeAboveMax {
        genesis: SignedAmount,
        max: SignedAmount,
    },
}
