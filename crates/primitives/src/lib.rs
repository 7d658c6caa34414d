//! Shared value types for the peg-in governance core.

mod context;
mod evm;
pub mod serde_helpers;

pub use context::CallContext;
pub use evm::{EVM_ADDRESS_LEN, derive_evm_address};

/// Chain-B identity of a caller or a voter.
pub use alloy_primitives::Address as EvmAddress;
