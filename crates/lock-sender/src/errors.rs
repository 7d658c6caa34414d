use thiserror::Error;

/// Reasons a deposit cannot be attributed to a sender.
///
/// These are expected outcomes: the deposit must be handled without
/// crediting any destination identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockSenderError {
    /// The transaction has no inputs to inspect.
    #[error("transaction has no inputs")]
    NoInputs,

    /// No permitted spend layout matched the first input.
    #[error("first input matches no recognized spend layout")]
    Unrecognized,
}
