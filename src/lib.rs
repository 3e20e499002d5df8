//! Secure Password Generation Library
//!
//! Builds an alphabet from a declarative [`Config`] and draws passwords
//! from it using a cryptographically secure random source.
//!
//! # Architecture
//!
//! ```text
//! Config → charset (alphabet resolution) → generator (uniform sampling)
//! ```
//!
//! The alphabet is resolved once when a [`Generator`] is built; every
//! generation call then samples independently and uniformly from it.
//!
//! # Example
//!
//! ```no_run
//! use secure_pwgen::{Config, Generator, Strength};
//!
//! let mut generator = Generator::with_config(Config {
//!     include_symbols: false,
//!     ..Config::default()
//! });
//!
//! let password = generator.generate().unwrap();
//! let batch = generator.generate_many_with_length(5, 16).unwrap();
//! let pin = Generator::with_config(Config {
//!     include_numbers: true,
//!     ..Config::empty()
//! })
//! .generate_strength(Strength::Weak)
//! .unwrap();
//! # let _ = (password, batch, pin);
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod config;
pub mod generator;

// Re-export commonly used types at crate root
pub use charset::{build_alphabet, Alphabet, Strength};
pub use config::{Config, ConfigError, FileConfig};
pub use generator::{generate_from, GenerateError, Generator};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
