//! Keys, scripts and deposit transactions for lock-sender tests.
//!
//! Signatures are placeholders: lock-sender resolution looks at script
//! structure only and never verifies them.

use bitcoin::{
    Amount, CompressedPublicKey, OutPoint, PublicKey, ScriptBuf, Sequence, Transaction, TxIn,
    TxOut, WScriptHash, Witness,
    absolute::LockTime,
    consensus,
    hashes::Hash,
    opcodes::{self, all::OP_CHECKMULTISIG},
    script::{Builder, PushBytesBuf},
    secp256k1::{Secp256k1, SecretKey},
    transaction::Version,
};

pub mod vectors;

/// Deterministic secret key; `n` must be non-zero.
pub fn test_secret_key(n: u8) -> SecretKey {
    SecretKey::from_slice(&[n; 32]).expect("test: valid secret key")
}

/// Compressed public key of [`test_secret_key`].
pub fn test_pubkey(n: u8) -> PublicKey {
    let secp = Secp256k1::new();
    PublicKey::new(test_secret_key(n).public_key(&secp))
}

/// Uncompressed encoding of the same key as [`test_pubkey`].
pub fn test_uncompressed_pubkey(n: u8) -> PublicKey {
    let secp = Secp256k1::new();
    PublicKey::new_uncompressed(test_secret_key(n).public_key(&secp))
}

pub fn test_compressed_pubkey(n: u8) -> CompressedPublicKey {
    CompressedPublicKey(test_secret_key(n).public_key(&Secp256k1::new()))
}

/// A DER-shaped placeholder signature with SIGHASH_ALL appended.
pub fn dummy_signature(tag: u8) -> Vec<u8> {
    let mut sig = vec![0x30, 0x44, 0x02, 0x20];
    sig.extend([tag; 32]);
    sig.extend([0x02, 0x20]);
    sig.extend([tag ^ 0xff; 32]);
    sig.push(0x01);
    sig
}

/// Standard `m <keys> n OP_CHECKMULTISIG` script.
pub fn multisig_redeem_script(required: u8, keys: &[PublicKey]) -> ScriptBuf {
    let mut builder = Builder::new().push_int(required as i64);
    for key in keys {
        builder = builder.push_key(key);
    }
    builder
        .push_int(keys.len() as i64)
        .push_opcode(OP_CHECKMULTISIG)
        .into_script()
}

/// Builds a push-only script out of raw data pushes.
pub fn push_script(pushes: &[&[u8]]) -> ScriptBuf {
    pushes
        .iter()
        .fold(Builder::new(), |builder, data| {
            builder.push_slice(PushBytesBuf::try_from(data.to_vec()).expect("test: push too large"))
        })
        .into_script()
}

/// One-input, one-output transaction spending with the given unlocking data.
pub fn spend_tx(script_sig: ScriptBuf, witness: Witness) -> Transaction {
    Transaction {
        version: Version::TWO,
        lock_time: LockTime::ZERO,
        input: vec![TxIn {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: Sequence::MAX,
            witness,
        }],
        output: vec![TxOut {
            value: Amount::from_sat(100_000_000),
            script_pubkey: ScriptBuf::new(),
        }],
    }
}

pub fn p2pkh_spend(pubkey: &PublicKey) -> Transaction {
    let script_sig = push_script(&[&dummy_signature(1), &pubkey.to_bytes()]);
    spend_tx(script_sig, Witness::new())
}

pub fn p2sh_multisig_spend(redeem_script: &ScriptBuf, signatures: u8) -> Transaction {
    let mut builder = Builder::new().push_opcode(opcodes::OP_0);
    for i in 0..signatures {
        builder = builder.push_slice(
            PushBytesBuf::try_from(dummy_signature(i + 1)).expect("test: signature push"),
        );
    }
    let script_sig = builder
        .push_slice(PushBytesBuf::try_from(redeem_script.to_bytes()).expect("test: redeem push"))
        .into_script();
    spend_tx(script_sig, Witness::new())
}

pub fn p2wpkh_spend(pubkey: &CompressedPublicKey) -> Transaction {
    spend_tx(ScriptBuf::new(), p2wpkh_witness(pubkey))
}

pub fn p2sh_p2wpkh_spend(pubkey: &CompressedPublicKey) -> Transaction {
    let program = ScriptBuf::new_p2wpkh(&pubkey.wpubkey_hash());
    spend_tx(push_script(&[program.as_bytes()]), p2wpkh_witness(pubkey))
}

fn p2wpkh_witness(pubkey: &CompressedPublicKey) -> Witness {
    Witness::from_slice(&[dummy_signature(1), pubkey.to_bytes().to_vec()])
}

pub fn p2wsh_spend(witness_script: &ScriptBuf, signatures: u8) -> Transaction {
    spend_tx(ScriptBuf::new(), p2wsh_witness(witness_script, signatures))
}

pub fn p2sh_p2wsh_spend(witness_script: &ScriptBuf, signatures: u8) -> Transaction {
    let program = ScriptBuf::new_p2wsh(&WScriptHash::hash(witness_script.as_bytes()));
    spend_tx(
        push_script(&[program.as_bytes()]),
        p2wsh_witness(witness_script, signatures),
    )
}

fn p2wsh_witness(witness_script: &ScriptBuf, signatures: u8) -> Witness {
    let mut items = vec![Vec::new()];
    items.extend((0..signatures).map(|i| dummy_signature(i + 1)));
    items.push(witness_script.to_bytes());
    Witness::from_slice(&items)
}

/// Decodes a consensus-serialized transaction given as hex.
pub fn decode_tx(raw: &str) -> Transaction {
    let bytes = hex::decode(raw).expect("test: valid hex");
    consensus::deserialize(&bytes).expect("test: valid transaction")
}
