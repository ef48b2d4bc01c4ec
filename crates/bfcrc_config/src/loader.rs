//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::BruteforceConfig;
use bfcrc_search::configure;
use std::path::Path;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "bfcrc.toml";

/// Loads and validates `bfcrc.toml` from `dir`.
pub fn load_config(dir: &Path) -> Result<BruteforceConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<BruteforceConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<BruteforceConfig, ConfigError> {
    let config: BruteforceConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Checks the search space and the input and run settings for consistency.
fn validate_config(config: &BruteforceConfig) -> Result<(), ConfigError> {
    configure(&config.search)?;
    if config.run.threads == Some(0) {
        return Err(ConfigError::ValidationError(
            "run.threads must be at least 1".to_string(),
        ));
    }
    let input = &config.input;
    if let Some(end) = input.end.or(input.offs_crc) {
        if end < input.start {
            return Err(ConfigError::ValidationError(format!(
                "input.end ({end}) is before input.start ({})",
                input.start
            )));
        }
    }
    Ok(())
}
