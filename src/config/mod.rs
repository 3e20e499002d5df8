//! Generator configuration.
//!
//! A [`Config`] describes which character classes make up the alphabet,
//! which confusable characters are filtered out of them, and the default
//! password length. Configurations can be built in code or loaded from
//! TOML files through [`FileConfig`].

mod file;
mod policy;

pub use file::{FileConfig, OutputConfig};
pub use policy::{Config, ConfigError};
