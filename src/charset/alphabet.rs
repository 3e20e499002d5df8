//! Alphabet resolution from a [`Config`].

use super::classes::{
    DIGITS, DIGITS_SIMILAR, LOWERCASE, LOWERCASE_SIMILAR, SYMBOLS, SYMBOLS_AMBIGUOUS,
};
use crate::config::Config;
use std::fmt;

/// Builds the alphabet string described by `config`.
///
/// A non-empty `character_set` wins and is returned unchanged. Otherwise the
/// enabled classes are appended in the order lowercase, uppercase, digits,
/// symbols, and each class's exclusion set is applied immediately after the
/// class is appended. The result may be empty.
pub fn build_alphabet(config: &Config) -> String {
    if !config.character_set.is_empty() {
        return config.character_set.clone();
    }

    let mut alphabet = String::new();

    if config.include_lowercase_letters {
        alphabet.push_str(LOWERCASE);
        if config.exclude_similar_characters {
            alphabet = remove_characters(&alphabet, LOWERCASE_SIMILAR);
        }
    }

    if config.include_uppercase_letters {
        alphabet.push_str(&LOWERCASE.to_ascii_uppercase());
        if config.exclude_similar_characters {
            alphabet = remove_characters(&alphabet, &LOWERCASE_SIMILAR.to_ascii_uppercase());
        }
    }

    if config.include_numbers {
        alphabet.push_str(DIGITS);
        if config.exclude_similar_characters {
            alphabet = remove_characters(&alphabet, DIGITS_SIMILAR);
        }
    }

    if config.include_symbols {
        alphabet.push_str(SYMBOLS);
        if config.exclude_ambiguous_characters {
            alphabet = remove_characters(&alphabet, SYMBOLS_AMBIGUOUS);
        }
    }

    alphabet
}

/// Removes every character of `s` that appears in `characters`.
///
/// Relative order and duplicates of the remaining characters are kept.
pub fn remove_characters(s: &str, characters: &str) -> String {
    s.chars().filter(|c| !characters.contains(*c)).collect()
}

/// A resolved alphabet, split into individual characters.
///
/// Multi-byte characters are single entries, so sampling never produces
/// partial UTF-8 sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Splits `s` into an alphabet.
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    /// Resolves the alphabet for `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&build_alphabet(config))
    }

    /// Returns the number of entries, counting duplicates.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the alphabet has no entries.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the entry at `index`.
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Returns true if `c` is one of the entries.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Returns the entries in order.
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl From<&str> for Alphabet {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}
