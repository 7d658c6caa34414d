use std::{collections::BTreeMap, fmt};

use bitcoin::{Amount, SignedAmount};
use borsh::{BorshDeserialize, BorshSerialize};
use peg_election::Election;
use thiserror::Error;

/// Which governed value an election decides.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ElectionKind {
    FeePerKb,
    LockingCap,
}

/// Key-value storage the governed values and their elections persist in.
///
/// Implementations are expected to run inside the enclosing ledger
/// transaction, which makes every write of a call all-or-nothing.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
pub trait BridgeStorage {
    /// Fee per kb, if one was ever set.
    fn fee_per_kb(&self) -> Result<Option<SignedAmount>, StorageError>;

    fn set_fee_per_kb(&mut self, fee: SignedAmount) -> Result<(), StorageError>;

    /// Locking cap, if it was initialized.
    fn locking_cap(&self) -> Result<Option<Amount>, StorageError>;

    fn set_locking_cap(&mut self, cap: Amount) -> Result<(), StorageError>;

    /// Pending votes of an election, if any were stored.
    fn election(&self, kind: ElectionKind) -> Result<Option<Election>, StorageError>;

    fn set_election(&mut self, kind: ElectionKind, election: &Election) -> Result<(), StorageError>;
}

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend operation failed.
    #[error("database error: {0}")]
    Database(String),

    /// Failed to serialize data.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Failed to deserialize data.
    #[error("deserialization error: {0}")]
    Deserialization(String),
}

impl StorageError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn serialization(err: impl fmt::Display) -> Self {
        Self::Serialization(err.to_string())
    }

    pub fn deserialization(err: impl fmt::Display) -> Self {
        Self::Deserialization(err.to_string())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
enum StorageKey {
    FeePerKb,
    LockingCap,
    Election(ElectionKind),
}

/// [`BridgeStorage`] over an in-memory map of borsh-encoded values.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBridgeStorage {
    entries: BTreeMap<StorageKey, Vec<u8>>,
}

impl InMemoryBridgeStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn get<T: BorshDeserialize>(&self, key: StorageKey) -> Result<Option<T>, StorageError> {
        self.entries
            .get(&key)
            .map(|bytes| borsh::from_slice(bytes).map_err(StorageError::deserialization))
            .transpose()
    }

    fn put<T: BorshSerialize + ?Sized>(
        &mut self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let bytes = borsh::to_vec(value).map_err(StorageError::serialization)?;
        self.entries.insert(key, bytes);
        Ok(())
    }
}

impl BridgeStorage for InMemoryBridgeStorage {
    fn fee_per_kb(&self) -> Result<Option<SignedAmount>, StorageError> {
        Ok(self.get::<i64>(StorageKey::FeePerKb)?.map(SignedAmount::from_sat))
    }

    fn set_fee_per_kb(&mut self, fee: SignedAmount) -> Result<(), StorageError> {
        self.put(StorageKey::FeePerKb, &fee.to_sat())
    }

    fn locking_cap(&self) -> Result<Option<Amount>, StorageError> {
        Ok(self.get::<u64>(StorageKey::LockingCap)?.map(Amount::from_sat))
    }

    fn set_locking_cap(&mut self, cap: Amount) -> Result<(), StorageError> {
        self.put(StorageKey::LockingCap, &cap.to_sat())
    }

    fn election(&self, kind: ElectionKind) -> Result<Option<Election>, StorageError> {
        self.get(StorageKey::Election(kind))
    }

    fn set_election(
        &mut self,
        kind: ElectionKind,
        election: &Election,
    ) -> Result<(), StorageError> {
        self.put(StorageKey::Election(kind), election)
    }
}

#[cfg(test)]
mod tests {
    use peg_election::AuthorizationPolicy;
    use peg_primitives::EvmAddress;

    use super::*;
    use crate::proposals::fee_per_kb_proposal;

    #[test]
    fn test_empty_storage() {
        let storage = InMemoryBridgeStorage::new();
        assert_eq!(storage.fee_per_kb().unwrap(), None);
        assert_eq!(storage.locking_cap().unwrap(), None);
        assert_eq!(storage.election(ElectionKind::FeePerKb).unwrap(), None);
    }

    #[test]
    fn test_values_persist() {
        let mut storage = InMemoryBridgeStorage::new();
        storage.set_fee_per_kb(SignedAmount::from_sat(-5)).unwrap();
        storage.set_locking_cap(Amount::from_sat(42)).unwrap();

        assert_eq!(storage.fee_per_kb().unwrap(), Some(SignedAmount::from_sat(-5)));
        assert_eq!(storage.locking_cap().unwrap(), Some(Amount::from_sat(42)));
    }

    #[test]
    fn test_elections_are_kept_apart() {
        let voters = [EvmAddress::repeat_byte(1), EvmAddress::repeat_byte(2)];
        let policy = AuthorizationPolicy::try_new(voters, 2).unwrap();
        let proposal = fee_per_kb_proposal(SignedAmount::from_sat(7));
        let mut election = Election::new();
        election.vote(&policy, EvmAddress::repeat_byte(1), proposal);

        let mut storage = InMemoryBridgeStorage::new();
        storage.set_election(ElectionKind::FeePerKb, &election).unwrap();

        assert_eq!(storage.election(ElectionKind::FeePerKb).unwrap(), Some(election));
        assert_eq!(storage.election(ElectionKind::LockingCap).unwrap(), None);
    }

    #[test]
    fn test_corrupt_entry_fails_to_decode() {
        let mut storage = InMemoryBridgeStorage::new();
        storage.entries.insert(StorageKey::LockingCap, vec![1, 2, 3]);

        assert!(matches!(
            storage.locking_cap(),
            Err(StorageError::Deserialization(_))
        ));
    }
}
