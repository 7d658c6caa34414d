//! Consensus parameters of the bridge core, loaded from TOML.

mod errors;
mod params;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use errors::ParamsError;
pub use params::{AuthorizerConfig, BridgeParams};
