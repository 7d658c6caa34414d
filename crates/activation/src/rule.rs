use std::fmt;

use serde::{Deserialize, Serialize};

/// Consensus rules whose activation is keyed by block height.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsensusRule {
    /// Lock whitelist entries may carry no value limit.
    UnlimitedWhitelist,

    /// The federation is described by multiple keys per member.
    MultikeyFederation,

    /// Peg-ins are bounded by the federation-governed locking cap.
    LockingCap,

    /// Multisig and segwit deposits can be attributed to a sender.
    ExtendedLockSenders,
}

impl ConsensusRule {
    pub const ALL: [ConsensusRule; 4] = [
        ConsensusRule::UnlimitedWhitelist,
        ConsensusRule::MultikeyFederation,
        ConsensusRule::LockingCap,
        ConsensusRule::ExtendedLockSenders,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ConsensusRule::UnlimitedWhitelist => "unlimited_whitelist",
            ConsensusRule::MultikeyFederation => "multikey_federation",
            ConsensusRule::LockingCap => "locking_cap",
            ConsensusRule::ExtendedLockSenders => "extended_lock_senders",
        }
    }
}

impl fmt::Display for ConsensusRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
