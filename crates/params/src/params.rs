use bitcoin::{Amount, Network, SignedAmount};
use peg_activation::{ActivationConfig, ActivationHeights};
use peg_election::{AuthorizationPolicy, PolicyError, QuorumRule};
use peg_primitives::{
    EvmAddress,
    serde_helpers::{serde_amount_sat, serde_signed_amount_sat},
};
use serde::{Deserialize, Serialize};

use crate::errors::ParamsError;

/// Voters allowed to vote on one governed value, and how many must agree.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorizerConfig {
    pub voters: Vec<EvmAddress>,
    pub quorum: QuorumRule,
}

impl AuthorizerConfig {
    pub fn to_policy(&self) -> Result<AuthorizationPolicy, PolicyError> {
        AuthorizationPolicy::from_rule(self.voters.clone(), self.quorum)
    }
}

/// Parameters shared by every node running the bridge core.
///
/// Fee amounts are signed since candidate fees are validated against them
/// and a vote may carry a negative value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeParams {
    /// Network resolved deposit addresses are encoded for.
    pub network: Network,

    /// Upper bound for a fee-per-kb vote, inclusive.
    #[serde(with = "serde_signed_amount_sat")]
    pub max_fee_per_kb: SignedAmount,

    /// Fee per kb in effect until the first fee vote resolves.
    #[serde(with = "serde_signed_amount_sat")]
    pub genesis_fee_per_kb: SignedAmount,

    /// Locking cap in effect until the first increase resolves.
    #[serde(with = "serde_amount_sat")]
    pub initial_locking_cap: Amount,

    /// A new locking cap may be at most this many times the current one.
    pub locking_cap_increments_multiplier: u64,

    pub fee_per_kb_authorizer: AuthorizerConfig,

    pub locking_cap_authorizer: AuthorizerConfig,

    /// Heights at which consensus rules activate. Missing rules never do.
    #[serde(default)]
    pub activations: ActivationHeights,
}

impl BridgeParams {
    /// Parses and validates params from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        let params: Self = toml::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks the params are internally consistent.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError` if an authorizer cannot form a policy, the
    /// multiplier is zero, or the fee bounds are not positive and ordered.
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.fee_per_kb_policy()?;
        self.locking_cap_policy()?;

        if self.locking_cap_increments_multiplier == 0 {
            return Err(ParamsError::ZeroMultiplier);
        }
        if !self.max_fee_per_kb.is_positive() {
            return Err(ParamsError::NonPositiveMaxFee(self.max_fee_per_kb));
        }
        if !self.genesis_fee_per_kb.is_positive() {
            return Err(ParamsError::NonPositiveGenesisFee(self.genesis_fee_per_kb));
        }
        if self.genesis_fee_per_kb > self.max_fee_per_kb {
            return Err(ParamsError::GenesisFeeAboveMax {
                genesis: self.genesis_fee_per_kb,
                max: self.max_fee_per_kb,
            });
        }

        Ok(())
    }

    pub fn fee_per_kb_policy(&self) -> Result<AuthorizationPolicy, ParamsError> {
        self.fee_per_kb_authorizer
            .to_policy()
            .map_err(|source| ParamsError::Authorizer {
                name: "fee per kb",
                source,
            })
    }

    pub fn locking_cap_policy(&self) -> Result<AuthorizationPolicy, ParamsError> {
        self.locking_cap_authorizer
            .to_policy()
            .map_err(|source| ParamsError::Authorizer {
                name: "locking cap",
                source,
            })
    }

    pub fn activation_config(&self) -> ActivationConfig {
        ActivationConfig::new(self.activations)
    }
}

#[cfg(test)]
mod tests {
    use peg_activation::{ActivationSource, ConsensusRule};

    use super::*;
    use crate::test_utils::gen_params;

    const PARAMS: &str = r#"
        network = "regtest"
        max_fee_per_kb = 5000000
        genesis_fee_per_kb = 100000
        initial_locking_cap = 100000000000
        locking_cap_increments_multiplier = 2

        [fee_per_kb_authorizer]
        voters = [
            "0x0101010101010101010101010101010101010101",
            "0x0202020202020202020202020202020202020202",
            "0x0303030303030303030303030303030303030303",
        ]
        quorum = "majority"

        [locking_cap_authorizer]
        voters = ["0x0404040404040404040404040404040404040404"]
        quorum = "one"

        [activations]
        locking_cap = 1000
        extended_lock_senders = 0
    "#;

    #[test]
    fn test_params_load() {
        let params = BridgeParams::from_toml_str(PARAMS);
        assert!(
            params.is_ok(),
            "should be able to load params but got: {:?}",
            params.err()
        );
        let params = params.unwrap();

        assert_eq!(params.network, Network::Regtest);
        assert_eq!(params.genesis_fee_per_kb, SignedAmount::from_sat(100_000));
        assert_eq!(params.initial_locking_cap, Amount::from_int_btc(1_000));

        let fee_policy = params.fee_per_kb_policy().unwrap();
        assert_eq!(fee_policy.len(), 3);
        assert_eq!(fee_policy.required_votes(), 2);
        assert_eq!(params.locking_cap_policy().unwrap().required_votes(), 1);

        let activation = params.activation_config();
        assert!(!activation.is_active(ConsensusRule::LockingCap, 999));
        assert!(activation.is_active(ConsensusRule::LockingCap, 1000));
        assert!(!activation.is_active(ConsensusRule::MultikeyFederation, u64::MAX));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let doc = format!("{PARAMS}\nbogus = 1\n");
        // Lands in the trailing table, which denies unknown fields as well.
        assert!(matches!(
            BridgeParams::from_toml_str(&doc),
            Err(ParamsError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_failures() {
        let mut params = gen_params();
        params.locking_cap_increments_multiplier = 0;
        assert!(matches!(params.validate(), Err(ParamsError::ZeroMultiplier)));

        let mut params = gen_params();
        params.genesis_fee_per_kb = SignedAmount::ZERO;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonPositiveGenesisFee(_))
        ));

        let mut params = gen_params();
        params.max_fee_per_kb = SignedAmount::from_sat(-1);
        assert!(matches!(params.validate(), Err(ParamsError::NonPositiveMaxFee(_))));

        let mut params = gen_params();
        params.genesis_fee_per_kb = params.max_fee_per_kb + SignedAmount::from_sat(1);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::GenesisFeeAboveMax { .. })
        ));

        let mut params = gen_params();
        params.locking_cap_authorizer.voters.clear();
        assert!(matches!(
            params.validate(),
            Err(ParamsError::Authorizer {
                name: "locking cap",
                source: PolicyError::EmptyVoters
            })
        ));

        let mut params = gen_params();
        params.fee_per_kb_authorizer.quorum = QuorumRule::Fixed(10);
        assert!(matches!(
            params.validate(),
            Err(ParamsError::Authorizer {
                source: PolicyError::InvalidQuorum { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_gen_params_valid() {
        assert!(gen_params().validate().is_ok());
    }
}
