//! Arbitrary-value generation shared by the workspace's tests.

use std::any::type_name;

use arbitrary::{Arbitrary, Unstructured};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
use rand_core::{OsRng, RngCore};

/// Bytes of entropy handed to [`Arbitrary`] per generated value.
const ENTROPY_LEN: usize = 16 * 1024;

/// How many fresh entropy buffers to try before giving up on a type.
const MAX_ATTEMPTS: usize = 16;

/// Produces [`Arbitrary`] values from a random or seeded byte stream.
#[derive(Debug)]
pub struct ArbitraryGenerator {
    buf: Vec<u8>,
    seeded: Option<ChaCha8Rng>,
}

impl Default for ArbitraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ArbitraryGenerator {
    /// Generator drawing entropy from the OS.
    pub fn new() -> Self {
        Self {
            buf: vec![0u8; ENTROPY_LEN],
            seeded: None,
        }
    }

    /// Generator that yields the same sequence of values for the same seed.
    pub fn new_seeded(seed: u64) -> Self {
        Self {
            buf: vec![0u8; ENTROPY_LEN],
            seeded: Some(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Generates an arbitrary `T`.
    ///
    /// # Panics
    ///
    /// Panics if `T` cannot be built from any of the attempted buffers.
    pub fn generate<T>(&mut self) -> T
    where
        T: for<'a> Arbitrary<'a>,
    {
        let mut last_error = None;
        for _ in 0..MAX_ATTEMPTS {
            self.refill();
            match T::arbitrary(&mut Unstructured::new(&self.buf)) {
                Ok(value) => return value,
                Err(err) => last_error = Some(err),
            }
        }
        panic!(
            "failed to generate arbitrary {}: {:?}",
            type_name::<T>(),
            last_error
        );
    }

    fn refill(&mut self) {
        match &mut self.seeded {
            Some(rng) => rng.fill_bytes(&mut self.buf),
            None => OsRng.fill_bytes(&mut self.buf),
        }
    }
}
