//! Password generation.
//!
//! A [`Generator`] owns a [`Config`](crate::config::Config), the alphabet
//! resolved from it at construction, and a cryptographically secure random
//! source. Every character is an independent uniform draw from the alphabet.
//!
//! The length-explicit operations (`generate_with_length`,
//! `generate_many_with_length`, `generate_strength`) never touch generator
//! state and are the recommended surface. The `generate_by_*` helpers keep
//! the older behaviour of overwriting the stored length and swallowing
//! errors.

mod compat;
mod password;
mod sampling;
mod shared;
#[cfg(test)]
pub(crate) mod testing;

pub use password::Generator;
pub use sampling::{generate_from, GenerateError};
pub use shared::shared;
