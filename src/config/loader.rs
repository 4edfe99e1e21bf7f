//! Configuration loading functionality.
//!
//! Loads the reconciliation policy from a single YAML file. Every field is
//! optional in the file; absent fields fall back to the policy defaults.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/reconciliation.yaml")
    ///
    /// # Returns
    ///
    /// Returns an `EngineConfig` on success, or an error if the file is
    /// missing or contains invalid YAML.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/reconciliation.yaml")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = EngineConfig::load("/nonexistent/reconciliation.yaml");
        assert!(matches!(
            result,
            Err(EngineError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("attendance-engine-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        fs::write(&path, "min_gap_minutes: [not a number").unwrap();

        let result = EngineConfig::load(&path);
        assert!(matches!(
            result,
            Err(EngineError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_valid_yaml() {
        let dir = std::env::temp_dir().join("attendance-engine-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("good.yaml");
        fs::write(&path, "min_gap_minutes: 3\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.min_gap_minutes, 3);
    }
}
