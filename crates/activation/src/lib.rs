//! Height-activated consensus rules.
//!
//! Every flag is a pure function of a rule table and an explicit block
//! height. Nothing here is cached: callers build an [`ActivationFlags`]
//! snapshot for the height they are executing at and drop it afterwards.

mod config;
mod flags;
mod gate;
mod rule;

pub use config::{ActivationConfig, ActivationHeights};
pub use flags::ActivationFlags;
pub use gate::{ActivationSource, FeatureGate};
#[cfg(any(test, feature = "test-utils"))]
pub use gate::MockActivationSource;
pub use rule::ConsensusRule;
