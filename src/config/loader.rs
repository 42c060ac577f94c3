//! Settings loading functionality.
//!
//! This module provides loading of [`EngineSettings`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineSettings;

impl EngineSettings {
    /// Loads settings from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/settings.yaml")
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if the file is missing
    /// ([`EngineError::ConfigNotFound`]) or contains invalid YAML
    /// ([`EngineError::ConfigParse`]).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads settings from a YAML file, falling back to defaults when the
    /// file is absent.
    ///
    /// A present-but-malformed file is still an error; only a missing file
    /// falls back.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        match Self::load(path) {
            Ok(settings) => Ok(settings),
            Err(EngineError::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }
}
