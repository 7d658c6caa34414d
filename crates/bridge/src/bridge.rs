use bitcoin::{Amount, SignedAmount, Transaction};
use peg_activation::{
    ActivationConfig, ActivationFlags, ActivationSource, ConsensusRule, FeatureGate,
};
use peg_election::Election;
use peg_governance::{BridgeStorage, FeePerKbRule, FeeVoteStatus, LockingCapRule};
use peg_lock_sender::{LockSenderError, LockSenderResolver, ResolvedSender};
use peg_params::{BridgeParams, ParamsError};
use peg_primitives::CallContext;
use tracing::*;

use crate::errors::BridgeError;

/// Entry point for the calls the bridge contract exposes.
///
/// Owns the storage collaborator. Activation flags are recomputed from the
/// call's height on every call and never kept.
#[derive(Debug)]
pub struct BridgeCore<S, A = ActivationConfig> {
    storage: S,
    gate: FeatureGate<A>,
    fee_rule: FeePerKbRule,
    locking_cap_rule: LockingCapRule,
    resolver: LockSenderResolver,
}

impl<S: BridgeStorage> BridgeCore<S> {
    /// Builds a core from validated params.
    pub fn from_params(params: &BridgeParams, storage: S) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self::new(
            storage,
            FeatureGate::new(params.activation_config()),
            FeePerKbRule::from_params(params)?,
            LockingCapRule::from_params(params)?,
            LockSenderResolver::new(params.network),
        ))
    }
}

impl<S: BridgeStorage, A: ActivationSource> BridgeCore<S, A> {
    pub fn new(
        storage: S,
        gate: FeatureGate<A>,
        fee_rule: FeePerKbRule,
        locking_cap_rule: LockingCapRule,
        resolver: LockSenderResolver,
    ) -> Self {
        Self {
            storage,
            gate,
            fee_rule,
            locking_cap_rule,
            resolver,
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Flags in force at `height`.
    pub fn activations(&self, height: u64) -> ActivationFlags {
        self.gate.snapshot(height)
    }

    fn require_active(&self, rule: ConsensusRule, height: u64) -> Result<(), BridgeError> {
        if self.activations(height).is_active(rule) {
            Ok(())
        } else {
            debug!(%rule, %height, "call rejected before activation");
            Err(BridgeError::NotActive(rule))
        }
    }

    pub fn vote_fee_change(
        &mut self,
        ctx: &CallContext,
        candidate: Option<SignedAmount>,
    ) -> Result<FeeVoteStatus, BridgeError> {
        Ok(self
            .fee_rule
            .vote_fee_change(&mut self.storage, ctx, candidate)?)
    }

    pub fn fee_per_kb(&self) -> Result<SignedAmount, BridgeError> {
        Ok(self.fee_rule.fee_per_kb(&self.storage)?)
    }

    pub fn fee_per_kb_election(&self) -> Result<Election, BridgeError> {
        Ok(self.fee_rule.election(&self.storage)?)
    }

    /// Votes for raising the locking cap. Only callable once the locking
    /// cap rule is active.
    pub fn vote_increase_locking_cap(
        &mut self,
        ctx: &CallContext,
        candidate: Amount,
    ) -> Result<bool, BridgeError> {
        self.require_active(ConsensusRule::LockingCap, ctx.height())?;
        Ok(self
            .locking_cap_rule
            .vote_increase(&mut self.storage, ctx, candidate)?)
    }

    /// Reads the locking cap, initializing it on first read. Only callable
    /// once the locking cap rule is active.
    pub fn read_locking_cap(&mut self, ctx: &CallContext) -> Result<Amount, BridgeError> {
        self.require_active(ConsensusRule::LockingCap, ctx.height())?;
        Ok(self.locking_cap_rule.read_locking_cap(&mut self.storage)?)
    }

    pub fn locking_cap_election(&self) -> Result<Election, BridgeError> {
        Ok(self.locking_cap_rule.election(&self.storage)?)
    }

    /// Attributes a deposit using the layouts enabled at `height`.
    pub fn resolve_lock_sender(
        &self,
        height: u64,
        tx: &Transaction,
    ) -> Result<ResolvedSender, LockSenderError> {
        let flags = self.activations(height);
        self.resolver.resolve_with(tx, &flags)
    }
}
