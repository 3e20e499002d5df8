//! Password policy configuration.

use crate::charset::{self, LENGTH_STRONG};
use serde::{Deserialize, Serialize};

/// Configuration for password generation.
///
/// When `character_set` is non-empty it is used verbatim as the alphabet
/// and every include/exclude flag is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target password length. Zero means unset.
    pub length: u32,
    /// Explicit alphabet override.
    pub character_set: String,
    /// Include the symbol class.
    pub include_symbols: bool,
    /// Include ASCII digits.
    pub include_numbers: bool,
    /// Include lowercase Latin letters.
    pub include_lowercase_letters: bool,
    /// Include uppercase Latin letters.
    pub include_uppercase_letters: bool,
    /// Drop look-alike letters and digits such as `l`, `O`, `0` and `1`.
    pub exclude_similar_characters: bool,
    /// Drop symbols that commonly need escaping, such as brackets and `\`.
    pub exclude_ambiguous_characters: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: LENGTH_STRONG,
            character_set: String::new(),
            include_symbols: true,
            include_numbers: true,
            include_lowercase_letters: true,
            include_uppercase_letters: true,
            exclude_similar_characters: true,
            exclude_ambiguous_characters: true,
        }
    }
}

impl Config {
    /// Creates a configuration with every class disabled and no override.
    ///
    /// Useful as a base for enabling classes one by one.
    pub fn empty() -> Self {
        Self {
            length: 0,
            character_set: String::new(),
            include_symbols: false,
            include_numbers: false,
            include_lowercase_letters: false,
            include_uppercase_letters: false,
            exclude_similar_characters: false,
            exclude_ambiguous_characters: false,
        }
    }

    /// Creates the default policy with the specified length.
    pub fn with_length(length: u32) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    /// Creates the default policy with an explicit alphabet override.
    pub fn with_character_set(character_set: impl Into<String>) -> Self {
        Self {
            character_set: character_set.into(),
            ..Default::default()
        }
    }

    /// Returns the configured length, or the strong tier length when unset.
    pub fn effective_length(&self) -> u32 {
        if self.length == 0 {
            LENGTH_STRONG
        } else {
            self.length
        }
    }

    /// Validates that the configuration resolves to a usable alphabet.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if charset::build_alphabet(self).is_empty() {
            return Err(ConfigError::EmptyCharacterPool);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("character pool is empty: enable a character class or set character_set")]
    EmptyCharacterPool,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}
