use std::fmt;

use bitcoin::{Address, secp256k1::PublicKey};
use peg_primitives::{EvmAddress, derive_evm_address};

/// Spend layout a deposit was funded from.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SenderType {
    /// P2PKH: signature and public key in the signature script.
    LegacySingleKey,

    /// P2SH multisig: signatures followed by the redeem script.
    LegacyMultisig,

    /// P2WPKH, native or nested in P2SH.
    SegwitSingleKey,

    /// P2WSH multisig, native or nested in P2SH.
    SegwitMultisig,
}

impl SenderType {
    /// Order in which layouts are tried.
    pub const PRIORITY: [SenderType; 4] = [
        SenderType::LegacySingleKey,
        SenderType::LegacyMultisig,
        SenderType::SegwitSingleKey,
        SenderType::SegwitMultisig,
    ];

    pub fn is_multisig(&self) -> bool {
        matches!(self, SenderType::LegacyMultisig | SenderType::SegwitMultisig)
    }

    pub fn is_segwit(&self) -> bool {
        matches!(self, SenderType::SegwitSingleKey | SenderType::SegwitMultisig)
    }
}

impl fmt::Display for SenderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SenderType::LegacySingleKey => "legacy-single-key",
            SenderType::LegacyMultisig => "legacy-multisig",
            SenderType::SegwitSingleKey => "segwit-single-key",
            SenderType::SegwitMultisig => "segwit-multisig",
        };
        f.write_str(s)
    }
}

/// The identity a deposit was attributed to.
///
/// Multisig senders have no single owning key, so no chain-B address can
/// be derived for them. Every other sender carries one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedSender {
    btc_address: Address,
    evm_address: Option<EvmAddress>,
    sender_type: SenderType,
}

impl ResolvedSender {
    pub(crate) fn single_key(
        sender_type: SenderType,
        btc_address: Address,
        key: &PublicKey,
    ) -> Self {
        debug_assert!(!sender_type.is_multisig());
        Self {
            btc_address,
            evm_address: Some(derive_evm_address(key)),
            sender_type,
        }
    }

    pub(crate) fn multisig(sender_type: SenderType, btc_address: Address) -> Self {
        debug_assert!(sender_type.is_multisig());
        Self {
            btc_address,
            evm_address: None,
            sender_type,
        }
    }

    /// Address on the Bitcoin side that funded the deposit.
    pub fn btc_address(&self) -> &Address {
        &self.btc_address
    }

    /// Address on the smart-contract chain controlled by the same key.
    pub fn evm_address(&self) -> Option<EvmAddress> {
        self.evm_address
    }

    pub fn sender_type(&self) -> SenderType {
        self.sender_type
    }
}
