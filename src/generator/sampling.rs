//! Uniform sampling from an alphabet.

use crate::charset::Alphabet;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors that can occur while generating a password.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("alphabet is empty: enable a character class or set character_set")]
    EmptyAlphabet,
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand_core::Error),
}

/// Draws an index uniformly from `[0, bound)`.
///
/// Words above the largest multiple of `bound` are rejected and redrawn, so
/// there is no modulo bias. `bound` must be non-zero.
pub(crate) fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, rand_core::Error>
where
    R: RngCore + ?Sized,
{
    let bound = bound as u64;
    // [0, zone] holds a whole number of `bound`-sized ranges.
    let zone = u64::MAX - (u64::MAX - bound + 1) % bound;

    loop {
        let mut word = [0u8; 8];
        rng.try_fill_bytes(&mut word)?;
        let value = u64::from_le_bytes(word);
        if value <= zone {
            return Ok((value % bound) as usize);
        }
    }
}

/// Generates one password of `length` characters drawn from `alphabet`.
///
/// Fails without producing any output if the alphabet is empty or the random
/// source reports an error.
pub fn generate_from<R>(
    rng: &mut R,
    alphabet: &Alphabet,
    length: u32,
) -> Result<String, GenerateError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if alphabet.is_empty() {
        return Err(GenerateError::EmptyAlphabet);
    }

    let chars = alphabet.as_chars();
    let mut password = String::with_capacity(length as usize);
    for _ in 0..length {
        let index = uniform_index(rng, chars.len())?;
        password.push(chars[index]);
    }

    Ok(password)
}
