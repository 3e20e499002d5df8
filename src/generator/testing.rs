//! Random sources with controlled behaviour for tests.

use rand_chacha::ChaCha20Rng;
use rand_core::{impls, CryptoRng, RngCore, SeedableRng};
use std::collections::VecDeque;
use std::num::NonZeroU32;

fn source_error() -> rand_core::Error {
    rand_core::Error::from(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap())
}

/// Behaves like a seeded ChaCha20 source until `remaining` fills have been
/// served, then fails every request.
pub(crate) struct FailingRng {
    inner: ChaCha20Rng,
    remaining: usize,
}

impl FailingRng {
    pub(crate) fn after(successful_fills: usize) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed([3u8; 32]),
            remaining: successful_fills,
        }
    }
}

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if self.remaining == 0 {
            return Err(source_error());
        }
        self.remaining -= 1;
        self.inner.try_fill_bytes(dest)
    }
}

impl CryptoRng for FailingRng {}

/// Yields a fixed sequence of 64-bit words, one per fill.
pub(crate) struct ScriptedRng {
    words: VecDeque<u64>,
}

impl ScriptedRng {
    pub(crate) fn new(words: Vec<u64>) -> Self {
        Self {
            words: words.into(),
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        let word = self.words.pop_front().ok_or_else(source_error)?;
        let bytes = word.to_le_bytes();
        dest.copy_from_slice(&bytes[..dest.len()]);
        Ok(())
    }
}

impl CryptoRng for ScriptedRng {}
