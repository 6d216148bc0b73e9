//! Error types for reference resolution, synthesis and parsing
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised by the document model, resolver and synthesizer
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `$ref` path fragment could not be followed
    #[error("Failed to dereference '{pointer}' at '{fragment}': {reason}")]
    ReferenceResolution {
        pointer: String,
        fragment: String,
        reason: String,
    },

    /// The value handed to the resolver is neither a pointer nor an object
    #[error("Cannot dereference a {found} value; expected a pointer string or an object")]
    InvalidReference { found: String },

    /// A `$ref` chain loops back on itself or exceeds the configured depth
    #[error("Circular reference detected: {chain}")]
    CircularReference { chain: String },

    /// Example synthesis recursed deeper than the configured limit
    #[error("Example synthesis exceeded the maximum depth of {depth}")]
    SynthesisDepthExceeded { depth: usize },

    /// The document root is unusable
    #[error("Invalid schema document: {reason}")]
    InvalidDocument { reason: String },

    /// JSON parsing errors
    #[error("Failed to parse JSON document: {source}")]
    JsonParse { source: serde_json::Error },

    /// YAML parsing errors
    #[error("Failed to parse YAML document: {source}")]
    YamlParse { source: serde_yaml::Error },

    /// Rendering the document back to text failed
    #[error("Failed to serialize schema: {reason}")]
    Serialization { reason: String },
}

impl SchemaError {
    /// Create a reference resolution error
    pub fn reference_resolution(
        pointer: impl Into<String>,
        fragment: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ReferenceResolution {
            pointer: pointer.into(),
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid reference error from the offending value
    pub fn invalid_reference(value: &serde_json::Value) -> Self {
        Self::InvalidReference {
            found: kind_of(value).to_string(),
        }
    }

    /// Create a circular reference error from the pointers followed so far
    pub fn circular_reference(chain: &[String]) -> Self {
        Self::CircularReference {
            chain: chain.join(" -> "),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(reason: impl Into<String>) -> Self {
        Self::InvalidDocument {
            reason: reason.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }

    /// Get the pointer associated with this error, if any
    pub fn pointer(&self) -> Option<&str> {
        match self {
            Self::ReferenceResolution { pointer, .. } => Some(pointer),
            _ => None,
        }
    }

    /// Check if this error came from following a `$ref`
    pub fn is_reference_error(&self) -> bool {
        matches!(
            self,
            Self::ReferenceResolution { .. }
                | Self::InvalidReference { .. }
                | Self::CircularReference { .. }
        )
    }
}

/// Human-readable name of a value's variant
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonParse { source }
    }
}

impl From<serde_yaml::Error> for SchemaError {
    fn from(source: serde_yaml::Error) -> Self {
        Self::YamlParse { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_creation() {
        let err = SchemaError::reference_resolution("#/definitions/user", "user", "Property not found");
        assert!(matches!(err, SchemaError::ReferenceResolution { .. }));
        assert_eq!(err.pointer(), Some("#/definitions/user"));
        assert!(err.is_reference_error());
        assert!(err.to_string().contains("#/definitions/user"));

        let circular = SchemaError::circular_reference(&[
            "#/definitions/a".to_string(),
            "#/definitions/b".to_string(),
            "#/definitions/a".to_string(),
        ]);
        assert_eq!(
            circular.to_string(),
            "Circular reference detected: #/definitions/a -> #/definitions/b -> #/definitions/a"
        );
        assert_eq!(circular.pointer(), None);
    }

    #[test]
    fn test_invalid_reference_names_the_variant() {
        let err = SchemaError::invalid_reference(&json!(42));
        assert!(err.to_string().contains("number"));
        assert!(err.is_reference_error());

        let depth = SchemaError::SynthesisDepthExceeded { depth: 8 };
        assert!(!depth.is_reference_error());
    }

    #[test]
    fn test_parse_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(SchemaError::from(json_err), SchemaError::JsonParse { .. }));

        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        assert!(matches!(SchemaError::from(yaml_err), SchemaError::YamlParse { .. }));
    }
}
