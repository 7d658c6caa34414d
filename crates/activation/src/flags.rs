use crate::{gate::ActivationSource, rule::ConsensusRule};

/// Which rules are in force at one particular height.
///
/// This is a value object for a single call site. It is never stored,
/// since the same node may evaluate calls at different heights (e.g. when
/// replaying history).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ActivationFlags {
    height: u64,
    unlimited_whitelist: bool,
    multikey_federation: bool,
    locking_cap: bool,
    extended_lock_senders: bool,
}

impl ActivationFlags {
    /// Evaluates every rule of `source` at `height`.
    pub fn compute<A: ActivationSource + ?Sized>(source: &A, height: u64) -> Self {
        Self {
            height,
            unlimited_whitelist: source.is_active(ConsensusRule::UnlimitedWhitelist, height),
            multikey_federation: source.is_active(ConsensusRule::MultikeyFederation, height),
            locking_cap: source.is_active(ConsensusRule::LockingCap, height),
            extended_lock_senders: source.is_active(ConsensusRule::ExtendedLockSenders, height),
        }
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn is_active(&self, rule: ConsensusRule) -> bool {
        match rule {
            ConsensusRule::UnlimitedWhitelist => self.unlimited_whitelist,
            ConsensusRule::MultikeyFederation => self.multikey_federation,
            ConsensusRule::LockingCap => self.locking_cap,
            ConsensusRule::ExtendedLockSenders => self.extended_lock_senders,
        }
    }

    pub fn is_unlimited_whitelist_enabled(&self) -> bool {
        self.unlimited_whitelist
    }

    pub fn is_multikey_federation_enabled(&self) -> bool {
        self.multikey_federation
    }

    pub fn is_locking_cap_enforced(&self) -> bool {
        self.locking_cap
    }

    pub fn are_extended_lock_senders_enabled(&self) -> bool {
        self.extended_lock_senders
    }
}
