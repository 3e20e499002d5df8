//! The password generator.

use super::sampling::{generate_from, GenerateError};
use crate::charset::{Alphabet, Strength, LENGTH_STRONG};
use crate::config::Config;
use rand_core::{CryptoRng, OsRng, RngCore};

/// Generates passwords from a fixed alphabet.
///
/// The alphabet is resolved once, when the generator is built. Changing the
/// stored length afterwards affects later [`generate`](Self::generate) calls
/// but never rebuilds the alphabet.
#[derive(Debug, Clone)]
pub struct Generator<R = OsRng> {
    config: Config,
    alphabet: Alphabet,
    rng: R,
}

impl Generator<OsRng> {
    /// Creates a generator with the default policy, backed by OS entropy.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a generator for `config`, backed by OS entropy.
    pub fn with_config(config: Config) -> Self {
        Self::with_rng(config, OsRng)
    }
}

impl Default for Generator<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> Generator<R> {
    /// Creates a generator for `config` that draws from `rng`.
    ///
    /// A zero `length` is replaced by the strong tier length.
    pub fn with_rng(mut config: Config, rng: R) -> Self {
        if config.length == 0 {
            config.length = LENGTH_STRONG;
        }

        let alphabet = Alphabet::from_config(&config);
        if alphabet.is_empty() {
            tracing::warn!("Generator built with an empty alphabet; generation will fail");
        }

        tracing::debug!(
            alphabet_size = alphabet.len(),
            length = config.length,
            explicit_character_set = !config.character_set.is_empty(),
            "Password generator initialized"
        );

        Self {
            config,
            alphabet,
            rng,
        }
    }

    /// Generates one password with the stored length.
    pub fn generate(&mut self) -> Result<String, GenerateError> {
        let length = self.config.length;
        self.generate_with_length(length)
    }

    /// Generates one password of `length` characters.
    pub fn generate_with_length(&mut self, length: u32) -> Result<String, GenerateError> {
        generate_from(&mut self.rng, &self.alphabet, length)
    }

    /// Generates one password with the length of `strength`.
    pub fn generate_strength(&mut self, strength: Strength) -> Result<String, GenerateError> {
        self.generate_with_length(strength.length())
    }

    /// Generates `count` passwords with the stored length.
    pub fn generate_many(&mut self, count: u32) -> Result<Vec<String>, GenerateError> {
        let length = self.config.length;
        self.generate_many_with_length(count, length)
    }

    /// Generates `count` passwords of `length` characters.
    ///
    /// Either every password is produced or an error is returned; a failed
    /// draw never yields a shortened list.
    pub fn generate_many_with_length(
        &mut self,
        count: u32,
        length: u32,
    ) -> Result<Vec<String>, GenerateError> {
        tracing::trace!(count, length, "Generating password batch");

        (0..count)
            .map(|_| self.generate_with_length(length))
            .collect()
    }

    /// Returns the configuration this generator was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the resolved alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Returns the stored password length.
    pub fn length(&self) -> u32 {
        self.config.length
    }

    /// Overwrites the stored password length. The alphabet is unaffected.
    pub fn set_length(&mut self, length: u32) {
        self.config.length = length;
    }
}
