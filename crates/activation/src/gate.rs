use crate::{flags::ActivationFlags, rule::ConsensusRule};

/// Source of truth for rule activation, usually the network's
/// [`ActivationConfig`](crate::ActivationConfig).
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait ActivationSource {
    /// Whether `rule` is in force for a block at `height`.
    fn is_active(&self, rule: ConsensusRule, height: u64) -> bool;
}

/// Evaluates activation flags for the height a call executes at.
#[derive(Clone, Debug)]
pub struct FeatureGate<A> {
    source: A,
}

impl<A: ActivationSource> FeatureGate<A> {
    pub fn new(source: A) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &A {
        &self.source
    }

    /// Computes a fresh snapshot of every flag at `height`.
    pub fn snapshot(&self, height: u64) -> ActivationFlags {
        ActivationFlags::compute(&self.source, height)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::*;

    use super::*;
    use crate::{ActivationConfig, ActivationHeights};

    #[test]
    fn test_snapshot_queries_each_rule_at_height() {
        let mut source = MockActivationSource::new();
        source
            .expect_is_active()
            .with(eq(ConsensusRule::LockingCap), eq(500))
            .times(1)
            .return_const(true);
        source
            .expect_is_active()
            .with(ne(ConsensusRule::LockingCap), eq(500))
            .times(3)
            .return_const(false);

        let flags = FeatureGate::new(source).snapshot(500);
        assert_eq!(flags.height(), 500);
        assert!(flags.is_locking_cap_enforced());
        assert!(!flags.is_unlimited_whitelist_enabled());
        assert!(!flags.is_multikey_federation_enabled());
        assert!(!flags.are_extended_lock_senders_enabled());
    }

    #[test]
    fn test_historical_heights_see_old_rules() {
        let gate = FeatureGate::new(ActivationConfig::new(ActivationHeights {
            unlimited_whitelist: Some(10),
            multikey_federation: Some(20),
            locking_cap: Some(30),
            extended_lock_senders: Some(40),
        }));

        let tip = gate.snapshot(100);
        let replay = gate.snapshot(25);

        for rule in ConsensusRule::ALL {
            assert!(tip.is_active(rule));
        }
        assert!(replay.is_unlimited_whitelist_enabled());
        assert!(replay.is_multikey_federation_enabled());
        assert!(!replay.is_locking_cap_enforced());
        assert!(!replay.are_extended_lock_senders_enabled());

        // Evaluating the past did not disturb later evaluations.
        assert_eq!(gate.snapshot(100), tip);
    }
}
