//! This module provides `ConfigLoader`, which reads a `RunConfig` from JSON files or strings.

use crate::types::{MachineError, RunConfig};
use std::fs;
use std::path::Path;

/// `ConfigLoader` is a utility struct for loading run configurations.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads a run configuration from the specified file path.
    ///
    /// # Returns
    ///
    /// * `Ok(RunConfig)` if the file is read and parsed successfully.
    /// * `Err(MachineError::FileError)` if the file cannot be read.
    /// * `Err(MachineError::ConfigError)` if the content is not a valid configuration.
    pub fn load_config(path: &Path) -> Result<RunConfig, MachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            MachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        Self::load_config_from_string(&content)
    }

    /// Parses a run configuration from JSON. Missing fields take their default values.
    pub fn load_config_from_string(content: &str) -> Result<RunConfig, MachineError> {
        serde_json::from_str(content).map_err(|e| MachineError::ConfigError(e.to_string()))
    }
}
