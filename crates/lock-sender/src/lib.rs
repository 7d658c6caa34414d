//! Attribution of peg-in deposits to the identity that funded them.
//!
//! A deposit is attributed by recognizing which spend layout its first
//! input uses. Each layout has an independent recognizer; the resolver
//! runs them in a fixed priority order and stops at the first match.

mod errors;
mod legacy;
mod resolver;
mod script;
mod segwit;
mod sender;

pub use errors::LockSenderError;
pub use resolver::LockSenderResolver;
pub use sender::{ResolvedSender, SenderType};
