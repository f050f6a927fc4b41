//! Configuration validation
//!
//! This module checks that a generation request can be satisfied.

use crate::config::types::GenerationConfig;
use crate::error::{ConfigError, ConfigResult};

/// Validate a generation config
///
/// The length is checked before the categories, so a config that is wrong
/// in both ways reports the length.
pub fn validate_config(config: &GenerationConfig) -> ConfigResult<()> {
    if config.length < 1 {
        return Err(ConfigError::InvalidLength);
    }

    // Spaces alone are not enough
    if config.categories.is_empty() {
        return Err(ConfigError::NoCategoryEnabled);
    }

    Ok(())
}

impl GenerationConfig {
    /// Validate this config
    pub fn validate(&self) -> ConfigResult<()> {
        validate_config(self)
    }
}
