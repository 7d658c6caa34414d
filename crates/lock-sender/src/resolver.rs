use bitcoin::{Network, Transaction, TxIn};
use peg_activation::ActivationFlags;
use tracing::*;

use crate::{
    errors::LockSenderError,
    legacy,
    segwit,
    sender::{ResolvedSender, SenderType},
};

/// Layouts attributable before extended lock senders activate.
const LEGACY_LAYOUTS: [SenderType; 1] = [SenderType::LegacySingleKey];

/// Attributes deposits to the identity that funded them.
///
/// Layouts are mutually exclusive by construction (witness presence, push
/// counts, push contents), so the first recognizer in
/// [`SenderType::PRIORITY`] order that matches decides the sender.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LockSenderResolver {
    network: Network,
}

impl LockSenderResolver {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    /// Network the resolved Bitcoin addresses are encoded for.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Resolves `tx` trying every known layout.
    pub fn resolve(&self, tx: &Transaction) -> Result<ResolvedSender, LockSenderError> {
        self.resolve_among(tx, &SenderType::PRIORITY)
    }

    /// Resolves `tx` trying only the layouts enabled by `flags`.
    pub fn resolve_with(
        &self,
        tx: &Transaction,
        flags: &ActivationFlags,
    ) -> Result<ResolvedSender, LockSenderError> {
        if flags.are_extended_lock_senders_enabled() {
            self.resolve_among(tx, &SenderType::PRIORITY)
        } else {
            self.resolve_among(tx, &LEGACY_LAYOUTS)
        }
    }

    fn resolve_among(
        &self,
        tx: &Transaction,
        layouts: &[SenderType],
    ) -> Result<ResolvedSender, LockSenderError> {
        let txid = tx.compute_txid();
        let input = tx.input.first().ok_or(LockSenderError::NoInputs)?;

        let resolved = layouts
            .iter()
            .find_map(|layout| self.recognize(*layout, input));

        match resolved {
            Some(sender) => {
                debug!(
                    %txid,
                    sender_type = %sender.sender_type(),
                    btc_address = %sender.btc_address(),
                    "attributed deposit"
                );
                Ok(sender)
            }
            None => {
                warn!(%txid, layouts = layouts.len(), "unattributable deposit");
                Err(LockSenderError::Unrecognized)
            }
        }
    }

    fn recognize(&self, layout: SenderType, input: &TxIn) -> Option<ResolvedSender> {
        match layout {
            SenderType::LegacySingleKey => legacy::recognize_single_key(input, self.network),
            SenderType::LegacyMultisig => legacy::recognize_multisig(input, self.network),
            SenderType::SegwitSingleKey => segwit::recognize_single_key(input, self.network),
            SenderType::SegwitMultisig => segwit::recognize_multisig(input, self.network),
        }
    }
}
