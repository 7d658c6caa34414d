use thiserror::Error;

use crate::storage::StorageError;

/// Faults raised by governed calls.
///
/// Business rejections (unauthorized caller, out-of-range candidate) are
/// not errors; they are reported through the call's return value.
#[derive(Debug, Error)]
pub enum GovernanceError {
    /// A fee vote arrived without a candidate value.
    #[error("fee vote is missing its candidate value")]
    MissingCandidate,

    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}
