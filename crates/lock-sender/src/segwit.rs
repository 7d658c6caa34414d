//! Recognizers for spends whose key material lives in the witness.
//!
//! The signature script is either empty (native outputs) or a single push
//! of the version 0 witness program (outputs nested in P2SH). A nested
//! program must commit to the witness key or script, otherwise the input
//! is not considered a match.

use bitcoin::{
    Address, CompressedPublicKey, Network, Script, ScriptBuf, TxIn, WScriptHash, hashes::Hash,
    secp256k1::constants::PUBLIC_KEY_SIZE,
};
use tracing::*;

use crate::{
    script::{MultisigScript, data_pushes},
    sender::{ResolvedSender, SenderType},
};

/// How the witness program is anchored by the signature script.
enum Anchor {
    Native,
    Nested,
}

fn anchor(input: &TxIn, program: &ScriptBuf) -> Option<Anchor> {
    match data_pushes(&input.script_sig)?.as_slice() {
        [] => Some(Anchor::Native),
        [push] if *push == program.as_bytes() => Some(Anchor::Nested),
        _ => None,
    }
}

/// Witness of exactly `<sig> <compressed pubkey>`.
pub(crate) fn recognize_single_key(input: &TxIn, network: Network) -> Option<ResolvedSender> {
    let items: Vec<&[u8]> = input.witness.iter().collect();
    let [signature, pubkey] = items.as_slice() else {
        return None;
    };
    // Segwit v0 only commits to compressed keys. The parser would also take
    // an uncompressed encoding and silently compress it.
    if signature.is_empty() || pubkey.len() != PUBLIC_KEY_SIZE {
        return None;
    }

    let pubkey = CompressedPublicKey::from_slice(pubkey).ok()?;
    let program = ScriptBuf::new_p2wpkh(&pubkey.wpubkey_hash());
    let address = match anchor(input, &program)? {
        Anchor::Native => Address::p2wpkh(&pubkey, network),
        Anchor::Nested => Address::p2shwpkh(&pubkey, network),
    };

    Some(ResolvedSender::single_key(
        SenderType::SegwitSingleKey,
        address,
        &pubkey.0,
    ))
}

/// Witness of `<empty> <sig>.. <multisig witness script>`.
pub(crate) fn recognize_multisig(input: &TxIn, network: Network) -> Option<ResolvedSender> {
    let items: Vec<&[u8]> = input.witness.iter().collect();
    let (witness_script, rest) = items.split_last()?;
    let (dummy, signatures) = rest.split_first()?;
    if !dummy.is_empty() || signatures.is_empty() || signatures.iter().any(|s| s.is_empty()) {
        return None;
    }

    let witness_script = Script::from_bytes(witness_script);
    let multisig = MultisigScript::parse(witness_script)?;
    trace!(
        required = multisig.required(),
        keys = multisig.keys().len(),
        signatures = signatures.len(),
        "found p2wsh multisig witness script"
    );

    let program = ScriptBuf::new_p2wsh(&WScriptHash::hash(witness_script.as_bytes()));
    let address = match anchor(input, &program)? {
        Anchor::Native => Address::p2wsh(witness_script, network),
        Anchor::Nested => Address::p2shwsh(witness_script, network),
    };

    Some(ResolvedSender::multisig(SenderType::SegwitMultisig, address))
}
