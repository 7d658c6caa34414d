use std::mem::size_of;

use alloy_primitives::{Address, keccak256};
use bitcoin::secp256k1::PublicKey;

pub const EVM_ADDRESS_LEN: usize = size_of::<Address>();

/// Derives the chain-B account address controlled by a secp256k1 key.
///
/// This is the last 20 bytes of the keccak256 digest of the uncompressed
/// point, without its `0x04` tag. Compressed and uncompressed encodings of
/// the same key give the same address.
pub fn derive_evm_address(pubkey: &PublicKey) -> Address {
    let uncompressed = pubkey.serialize_uncompressed();
    let digest = keccak256(&uncompressed[1..]);
    Address::from_slice(&digest[digest.len() - EVM_ADDRESS_LEN..])
}
