//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - An explicit `--config` path (or `SCHEMATA_CONFIG`)

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use schemata_core::SchemaConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Resolver and synthesizer limits
    pub schema: SchemaConfig,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to load config");
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".schemata.yaml"),
            PathBuf::from(".schemata.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let schemata_dir = config_dir.join("schemata");
            paths.push(schemata_dir.join("config.yaml"));
            paths.push(schemata_dir.join("config.json"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging.level, None);
        assert_eq!(config.schema, SchemaConfig::default());
    }

    #[test]
    fn test_load_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(
            &path,
            "output:\n  format: yaml\nlogging:\n  level: debug\nschema:\n  max_reference_depth: 8\n",
        )
        .unwrap();

        let config = Config::load_with_file(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.schema.max_reference_depth, 8);
        assert_eq!(config.schema.max_synthesis_depth, 128);
    }

    #[test]
    fn test_load_json_file_with_partial_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"logging": {"format": "json"}}"#).unwrap();

        let config = Config::load_with_file(Some(&path)).unwrap();
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_with_file(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "output: [").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Yaml(_))));
    }

    #[test]
    fn test_default_paths_prefer_working_directory() {
        let paths = Config::default_config_paths();
        assert_eq!(paths[0], PathBuf::from(".schemata.yaml"));
        assert_eq!(paths[1], PathBuf::from(".schemata.json"));
    }
}
