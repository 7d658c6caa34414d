use serde::{Deserialize, Serialize};

use crate::{gate::ActivationSource, rule::ConsensusRule};

/// Activation height per rule, as written in configuration files.
///
/// A missing entry means the rule never activates.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivationHeights {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlimited_whitelist: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multikey_federation: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locking_cap: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_lock_senders: Option<u64>,
}

/// The rule table consulted by the [`FeatureGate`](crate::FeatureGate).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationConfig {
    heights: ActivationHeights,
}

impl ActivationConfig {
    pub fn new(heights: ActivationHeights) -> Self {
        Self { heights }
    }

    /// Every rule active from genesis.
    pub fn all_active() -> Self {
        Self::uniform(Some(0))
    }

    /// No rule ever active.
    pub fn none_active() -> Self {
        Self::uniform(None)
    }

    fn uniform(height: Option<u64>) -> Self {
        Self::new(ActivationHeights {
            unlimited_whitelist: height,
            multikey_federation: height,
            locking_cap: height,
            extended_lock_senders: height,
        })
    }

    pub fn heights(&self) -> &ActivationHeights {
        &self.heights
    }

    /// Height from which `rule` is in force, if it is scheduled at all.
    pub fn activation_height(&self, rule: ConsensusRule) -> Option<u64> {
        match rule {
            ConsensusRule::UnlimitedWhitelist => self.heights.unlimited_whitelist,
            ConsensusRule::MultikeyFederation => self.heights.multikey_federation,
            ConsensusRule::LockingCap => self.heights.locking_cap,
            ConsensusRule::ExtendedLockSenders => self.heights.extended_lock_senders,
        }
    }
}

impl ActivationSource for ActivationConfig {
    fn is_active(&self, rule: ConsensusRule, height: u64) -> bool {
        self.activation_height(rule)
            .is_some_and(|activation| height >= activation)
    }
}
