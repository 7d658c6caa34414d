//! Params fixtures for tests across the workspace.

use bitcoin::{Amount, Network, SignedAmount};
use peg_activation::ActivationHeights;
use peg_election::QuorumRule;
use peg_primitives::EvmAddress;

use crate::params::{AuthorizerConfig, BridgeParams};

/// Voter `n` of the authorizers in [`gen_params`].
pub fn voter(n: u8) -> EvmAddress {
    EvmAddress::repeat_byte(n)
}

/// Regtest params with every rule active from genesis.
///
/// Both authorizers are voters 1, 2 and 3 with a quorum of 2. The locking
/// cap starts at 100 BTC and may at most double per vote.
pub fn gen_params() -> BridgeParams {
    let authorizer = AuthorizerConfig {
        voters: (1..=3).map(voter).collect(),
        quorum: QuorumRule::Fixed(2),
    };

    BridgeParams {
        network: Network::Regtest,
        max_fee_per_kb: SignedAmount::from_sat(5_000_000),
        genesis_fee_per_kb: SignedAmount::from_sat(100_000),
        initial_locking_cap: Amount::from_int_btc(100),
        locking_cap_increments_multiplier: 2,
        fee_per_kb_authorizer: authorizer.clone(),
        locking_cap_authorizer: authorizer,
        activations: ActivationHeights {
            unlimited_whitelist: Some(0),
            multikey_federation: Some(0),
            locking_cap: Some(0),
            extended_lock_senders: Some(0),
        },
    }
}
