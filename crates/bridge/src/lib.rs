//! The bridge core: governed calls and deposit attribution, evaluated
//! against the activation flags of the height each call executes at.

mod bridge;
mod errors;

pub use bridge::BridgeCore;
pub use errors::BridgeError;
