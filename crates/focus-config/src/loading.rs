use std::path::Path;

use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::types::FocusConfig;
use crate::validation::validate_config;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load and validate the config at `path`.
///
/// A missing file yields `FocusConfig::default()`. A file that exists but
/// cannot be read, parsed or validated is an error.
pub fn load_config(path: &Path) -> Result<FocusConfig, ConfigError> {
    if !path.exists() {
        debug!(
            event = "config.load_skipped",
            path = %path.display(),
            reason = "file not found"
        );
        return Ok(FocusConfig::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: FocusConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    validate_config(&config)?;

    info!(event = "config.loaded", path = %path.display());
    Ok(config)
}
