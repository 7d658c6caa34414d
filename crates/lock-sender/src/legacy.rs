//! Recognizers for spends that carry everything in the signature script.

use bitcoin::{Address, Network, PublicKey, Script, TxIn};
use tracing::*;

use crate::{
    script::{MultisigScript, data_pushes},
    sender::{ResolvedSender, SenderType},
};

/// `<sig> <pubkey>` with an empty witness.
pub(crate) fn recognize_single_key(input: &TxIn, network: Network) -> Option<ResolvedSender> {
    if !input.witness.is_empty() {
        return None;
    }

    let pushes = data_pushes(&input.script_sig)?;
    let [signature, pubkey] = pushes.as_slice() else {
        return None;
    };
    if signature.is_empty() {
        return None;
    }

    let pubkey = PublicKey::from_slice(pubkey).ok()?;
    let address = Address::p2pkh(pubkey.pubkey_hash(), network);
    Some(ResolvedSender::single_key(
        SenderType::LegacySingleKey,
        address,
        &pubkey.inner,
    ))
}

/// `OP_0 <sig>.. <redeem script>` with an empty witness, where the redeem
/// script is a standard multisig.
pub(crate) fn recognize_multisig(input: &TxIn, network: Network) -> Option<ResolvedSender> {
    if !input.witness.is_empty() {
        return None;
    }

    let pushes = data_pushes(&input.script_sig)?;
    let (redeem_script, rest) = pushes.split_last()?;
    let (dummy, signatures) = rest.split_first()?;
    if !dummy.is_empty() || signatures.is_empty() || signatures.iter().any(|s| s.is_empty()) {
        return None;
    }

    let redeem_script = Script::from_bytes(redeem_script);
    let multisig = MultisigScript::parse(redeem_script)?;
    trace!(
        required = multisig.required(),
        keys = multisig.keys().len(),
        signatures = signatures.len(),
        "found p2sh multisig redeem script"
    );

    let address = Address::p2sh(redeem_script, network).ok()?;
    Some(ResolvedSender::multisig(SenderType::LegacyMultisig, address))
}
