//! Parsing and validation of `bfcrc.toml` search configuration files.
//!
//! The file has three optional tables: `[search]` describes the parameter
//! space, `[input]` how test vectors are read from the message file, and
//! `[run]` how the search is executed and where results go. Every field has a
//! default, so an empty file is valid.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
