use alloy_primitives::Address;

/// What the core knows about the chain-B call it is serving.
///
/// The height is carried with every call so that activation flags are
/// derived from it on the spot instead of being kept around.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CallContext {
    sender: Address,
    height: u64,
}

impl CallContext {
    pub fn new(sender: Address, height: u64) -> Self {
        Self { sender, height }
    }

    /// Chain-B address that signed the enclosing transaction.
    pub fn sender(&self) -> Address {
        self.sender
    }

    /// Height of the block the call executes in.
    pub fn height(&self) -> u64 {
        self.height
    }
}
