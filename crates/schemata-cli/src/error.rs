//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from schemata-core
    #[error("Schema error: {0}")]
    Schema(#[from] schemata_core::SchemaError),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// File extension is neither JSON nor YAML
    #[error("Unsupported file format for {}: expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// The document has no `rel: self` link
    #[error("No self link found in {}", path.display())]
    HrefMissing { path: PathBuf },

    /// Some `$ref` pointers did not resolve
    #[error("{count} reference(s) could not be resolved")]
    UnresolvedReferences { count: usize },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Schema(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::UnsupportedFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::HrefMissing { .. } => 6,
            Self::UnresolvedReferences { .. } => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemata_core::SchemaError;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            Error::from(io::Error::new(io::ErrorKind::Other, "boom")),
            Error::from(SchemaError::invalid_document("not an object")),
            Error::FileNotFound { path: PathBuf::from("a.json") },
            Error::UnsupportedFormat { path: PathBuf::from("a.toml") },
            Error::config("bad"),
            Error::HrefMissing { path: PathBuf::from("a.json") },
            Error::UnresolvedReferences { count: 2 },
            Error::other("misc"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(Error::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|code| *code != 0));
    }

    #[test]
    fn test_format_error_plain() {
        let error = Error::HrefMissing { path: PathBuf::from("api.json") };
        assert_eq!(format_error(&error, false), "Error: No self link found in api.json");
    }

    #[test]
    fn test_schema_error_message_is_kept() {
        let error = Error::from(SchemaError::reference_resolution(
            "#/definitions/missing",
            "missing",
            "no such property",
        ));
        assert!(error.to_string().contains("#/definitions/missing"));
    }
}
