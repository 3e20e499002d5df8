//! Built-in character classes and strength tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weak tier length.
pub const LENGTH_WEAK: u32 = 6;
/// OK tier length.
pub const LENGTH_OK: u32 = 12;
/// Strong tier length, also the default.
pub const LENGTH_STRONG: u32 = 24;
/// Very strong tier length.
pub const LENGTH_VERY_STRONG: u32 = 36;

/// Lowercase Latin letters. The uppercase class is derived from this.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Letters removed when excluding similar characters.
pub const LOWERCASE_SIMILAR: &str = "ijlo";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// Digits removed when excluding similar characters.
pub const DIGITS_SIMILAR: &str = "01";
/// Symbol class. `?` appears twice and is sampled with double weight.
pub const SYMBOLS: &str = "!$%^&*()_+{}:@[];'#<>?,./|\\-=?";
/// Symbols removed when excluding ambiguous characters.
pub const SYMBOLS_AMBIGUOUS: &str = "<>[](){}:;'/|\\,";

/// Named password strength tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    /// 6 characters.
    Weak,
    /// 12 characters.
    Ok,
    /// 24 characters.
    Strong,
    /// 36 characters.
    VeryStrong,
}

impl Strength {
    /// All tiers, weakest first.
    pub const ALL: [Strength; 4] = [
        Strength::Weak,
        Strength::Ok,
        Strength::Strong,
        Strength::VeryStrong,
    ];

    /// Returns the fixed password length of this tier.
    pub fn length(self) -> u32 {
        match self {
            Strength::Weak => LENGTH_WEAK,
            Strength::Ok => LENGTH_OK,
            Strength::Strong => LENGTH_STRONG,
            Strength::VeryStrong => LENGTH_VERY_STRONG,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Ok => "ok",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown tier name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strength tier '{0}' (expected weak, ok, strong or very-strong)")]
pub struct ParseStrengthError(String);

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strength::ALL
            .into_iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| ParseStrengthError(s.to_string()))
    }
}
