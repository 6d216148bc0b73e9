//! JSON and YAML text for schema documents
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::document::Schema;
use crate::error::{SchemaError, SchemaResult};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON format (.json)
    #[default]
    Json,
    /// YAML format (.yaml, .yml)
    Yaml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    /// Get file extensions for this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Yaml => &["yaml", "yml"],
        }
    }
}

impl FromStr for Format {
    type Err = SchemaError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(SchemaError::invalid_document(format!(
                "unsupported format '{}', expected json or yaml",
                other
            ))),
        }
    }
}

/// Parse document text into a normalized schema
pub fn parse_document(content: &str, format: Format) -> SchemaResult<Schema> {
    Schema::from_value(parse_value(content, format)?)
}

/// Parse document text into a raw tree, without normalization
pub fn parse_value(content: &str, format: Format) -> SchemaResult<Value> {
    Ok(match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => {
            // Go through serde_yaml::Value so non-string keys (e.g. `200:`) become strings
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
            serde_json::to_value(yaml).map_err(|e| SchemaError::invalid_document(e.to_string()))?
        }
    })
}

impl Schema {
    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> SchemaResult<Self> {
        parse_document(content, Format::Json)
    }

    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> SchemaResult<Self> {
        parse_document(content, Format::Yaml)
    }

    /// Pretty JSON with blank lines removed and a single trailing newline
    pub fn to_json(&self) -> SchemaResult<String> {
        let pretty = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SchemaError::serialization(e.to_string()))?;
        let mut text = pretty
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        text.push('\n');
        Ok(text)
    }

    /// Block-style YAML
    pub fn to_yaml(&self) -> SchemaResult<String> {
        serde_yaml::to_string(&Value::Object(self.data.clone()))
            .map_err(|e| SchemaError::serialization(e.to_string()))
    }

    /// Default text rendering (JSON)
    pub fn to_text(&self) -> SchemaResult<String> {
        self.to_json()
    }

    /// Render in the requested format
    pub fn render(&self, format: Format) -> SchemaResult<String> {
        match format {
            Format::Json => self.to_json(),
            Format::Yaml => self.to_yaml(),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
