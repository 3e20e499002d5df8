//! Character classes and alphabet construction.
//!
//! The alphabet is assembled from four built-in classes in a fixed order
//! (lowercase, uppercase, digits, symbols). Each class carries its own
//! exclusion set which is applied right after the class is appended.

mod alphabet;
mod classes;

pub use alphabet::{build_alphabet, remove_characters, Alphabet};
pub use classes::{
    ParseStrengthError, Strength, DIGITS, DIGITS_SIMILAR, LENGTH_OK, LENGTH_STRONG,
    LENGTH_VERY_STRONG, LENGTH_WEAK, LOWERCASE, LOWERCASE_SIMILAR, SYMBOLS, SYMBOLS_AMBIGUOUS,
};
